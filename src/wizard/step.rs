/// Position in the signup wizard, steps 1 through 5.
///
/// Positions outside the range are unrepresentable; [`Step::from_number`]
/// is the checked entry point for untrusted numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    /// Step 1 — e-mail, password, terms.
    #[default]
    Credentials,
    /// Step 2 — name, phone, tax document, referrer.
    Personal,
    /// Step 3 — postal address.
    Address,
    /// Step 4 — bank account and Pix key.
    Banking,
    /// Step 5 — document uploads.
    Documents,
}

impl Step {
    /// First step of the flow.
    pub const FIRST: Step = Step::Credentials;
    /// Last step of the flow.
    pub const LAST: Step = Step::Documents;

    /// 1-based step number shown in the progress indicator.
    pub fn number(self) -> u8 {
        match self {
            Self::Credentials => 1,
            Self::Personal => 2,
            Self::Address => 3,
            Self::Banking => 4,
            Self::Documents => 5,
        }
    }

    /// Checked conversion from a 1-based number.
    pub fn from_number(number: u8) -> Option<Step> {
        match number {
            1 => Some(Self::Credentials),
            2 => Some(Self::Personal),
            3 => Some(Self::Address),
            4 => Some(Self::Banking),
            5 => Some(Self::Documents),
            _ => None,
        }
    }

    /// The step after this one, if any.
    pub fn next(self) -> Option<Step> {
        Self::from_number(self.number() + 1)
    }

    /// The step before this one, if any.
    pub fn prev(self) -> Option<Step> {
        self.number().checked_sub(1).and_then(Self::from_number)
    }

    /// Heading shown for the step.
    pub fn title(self) -> &'static str {
        match self {
            Self::Credentials => "Crie sua conta",
            Self::Personal => "Complete seu cadastro",
            Self::Address => "Endereço",
            Self::Banking => "Dados Bancários",
            Self::Documents => "Upload de Documentos",
        }
    }
}

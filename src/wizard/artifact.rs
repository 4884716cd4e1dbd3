use serde::{Deserialize, Serialize};

/// The three upload slots required before submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArtifactSlot {
    /// Front of the identity document.
    Front,
    /// Back of the identity document.
    Back,
    /// Selfie holding the document.
    Selfie,
}

impl ArtifactSlot {
    /// All slots, in submission order.
    pub const ALL: [ArtifactSlot; 3] = [Self::Front, Self::Back, Self::Selfie];

    /// Wire/persistence key for the slot.
    pub fn key(self) -> &'static str {
        match self {
            Self::Front => "frente",
            Self::Back => "verso",
            Self::Selfie => "selfie",
        }
    }
}

/// An uploaded binary file.
///
/// Only the name ever leaves the wizard through the persisted summary;
/// bytes travel solely in the submission payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Original file name as picked by the user.
    pub file_name: String,
    /// Raw file content.
    pub bytes: Vec<u8>,
}

impl Artifact {
    /// Convenience constructor.
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }
}

/// Holder for the three artifact slots.
#[derive(Debug, Clone, Default)]
pub struct ArtifactSet {
    front: Option<Artifact>,
    back: Option<Artifact>,
    selfie: Option<Artifact>,
}

impl ArtifactSet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place (or replace) an artifact in a slot.
    pub fn set(&mut self, slot: ArtifactSlot, artifact: Artifact) {
        *self.slot_mut(slot) = Some(artifact);
    }

    /// Artifact currently in a slot.
    pub fn get(&self, slot: ArtifactSlot) -> Option<&Artifact> {
        match slot {
            ArtifactSlot::Front => self.front.as_ref(),
            ArtifactSlot::Back => self.back.as_ref(),
            ArtifactSlot::Selfie => self.selfie.as_ref(),
        }
    }

    /// Whether every slot is populated.
    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    /// Slots still waiting for an upload.
    pub fn missing(&self) -> Vec<ArtifactSlot> {
        ArtifactSlot::ALL
            .into_iter()
            .filter(|&slot| self.get(slot).is_none())
            .collect()
    }

    fn slot_mut(&mut self, slot: ArtifactSlot) -> &mut Option<Artifact> {
        match slot {
            ArtifactSlot::Front => &mut self.front,
            ArtifactSlot::Back => &mut self.back,
            ArtifactSlot::Selfie => &mut self.selfie,
        }
    }
}

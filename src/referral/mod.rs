//! Referrer resolution for the affiliate program.
//!
//! A signup is attributed to a referrer either through the entry link's
//! `ref` query parameter (read-only, suppresses manual selection) or by
//! picking one from the directory during step 2. The directory sits behind
//! [`ReferrerDirectory`] so a real backend can replace the in-memory
//! candidate set without touching wizard logic.

mod entry;

pub use entry::ref_code_from_query;

use serde::{Deserialize, Serialize};

/// Role of a referrer inside the affiliate program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReferrerKind {
    /// Content creator driving organic traffic.
    Influencer,
    /// Paid-traffic manager.
    TrafficManager,
    /// Manages a roster of influencers.
    InfluencerManager,
    /// Plain affiliate.
    Affiliate,
}

impl ReferrerKind {
    /// Display label as shown in the signup form.
    pub fn label(self) -> &'static str {
        match self {
            Self::Influencer => "Influencer",
            Self::TrafficManager => "Gestor de Tráfego",
            Self::InfluencerManager => "Gestor de Influencers",
            Self::Affiliate => "Afiliado",
        }
    }
}

/// An affiliate who can be credited for a signup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Referrer {
    /// Directory identifier, also the value carried by referral links.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact e-mail.
    pub email: String,
    /// Program role.
    pub kind: ReferrerKind,
}

/// Lookup capability over the set of known referrers.
pub trait ReferrerDirectory {
    /// Resolve a referrer by id.
    fn lookup(&self, id: &str) -> Option<&Referrer>;

    /// All referrers offered for manual selection.
    fn all(&self) -> &[Referrer];
}

/// Fixed in-memory referrer set.
///
/// Stands in for the backend directory service; production code implements
/// [`ReferrerDirectory`] over the real lookup instead.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    referrers: Vec<Referrer>,
}

impl InMemoryDirectory {
    /// Empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory seeded with the demo candidate set.
    pub fn with_demo_referrers() -> Self {
        let referrer = |id: &str, name: &str, email: &str, kind| Referrer {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            kind,
        };
        Self {
            referrers: vec![
                referrer("1", "João Silva", "joao@exemplo.com", ReferrerKind::Influencer),
                referrer("2", "Maria Souza", "maria@exemplo.com", ReferrerKind::TrafficManager),
                referrer(
                    "3",
                    "Carlos Oliveira",
                    "carlos@exemplo.com",
                    ReferrerKind::InfluencerManager,
                ),
                referrer("4", "Ana Pereira", "ana@exemplo.com", ReferrerKind::Affiliate),
            ],
        }
    }

    /// Add a referrer to the directory.
    pub fn insert(&mut self, referrer: Referrer) {
        self.referrers.push(referrer);
    }
}

impl ReferrerDirectory for InMemoryDirectory {
    fn lookup(&self, id: &str) -> Option<&Referrer> {
        self.referrers.iter().find(|r| r.id == id)
    }

    fn all(&self) -> &[Referrer] {
        &self.referrers
    }
}

//! Workflow taxonomy shared by projects and grains.
//!
//! The taxonomy is a fixed, ordered list of stages. Projects and grains
//! move through the same pipeline independently: [`GrainStatus`] is the
//! same type as [`ProjectStatus`]. There are no transition rules; any
//! stage may change to any other stage, backwards included.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Declares a fieldless enum whose variants carry a wire slug and a
/// display label.
///
/// Variant declaration order is the canonical order: it drives `ALL`,
/// `position()` and the derived `Ord`.
macro_rules! define_labeled_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($what:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => ($slug:literal, $label:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $slug)] $variant ),+
        }

        impl $name {
            /// Number of variants.
            pub const COUNT: usize = [$($slug),+].len();

            /// Every variant, in canonical order.
            pub const ALL: [$name; Self::COUNT] = [$($name::$variant),+];

            /// Stable identifier used on the wire and in fixtures.
            pub fn slug(self) -> &'static str {
                match self {
                    $( $name::$variant => $slug ),+
                }
            }

            /// Human-readable label.
            pub fn label(self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }

            /// Zero-based index of this variant in [`Self::ALL`].
            pub fn position(self) -> usize {
                self as usize
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.slug())
            }
        }

        impl std::str::FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $slug => Ok($name::$variant), )+
                    other => Err(CoreError::Validation(format!(
                        "Invalid {} '{other}'. Must be one of: {}",
                        $what,
                        [$($slug),+].join(", ")
                    ))),
                }
            }
        }
    };
}

define_labeled_enum! {
    /// Workflow stage of a project or grain.
    ProjectStatus ("status") {
        AppelOffre => ("appel-offre", "Appel d'offre"),
        Propal => ("propal", "Propal"),
        ConceptionConsultant => ("conception-consultant", "Conception Consultant"),
        ConceptionCrea => ("conception-crea", "Conception Créa"),
        Developpement => ("developpement", "Développement"),
        RetourEquipe => ("retour-equipe", "Retour Équipe"),
        RetourClient => ("retour-client", "Retour Client"),
        Termine => ("termine", "Terminé"),
    }
}

define_labeled_enum! {
    /// Deliverable kind of a grain.
    GrainType ("grain type") {
        Propale => ("propale", "Propale"),
        Budget => ("budget", "Budget"),
        Video => ("video", "Vidéo"),
        Maquette => ("maquette", "Maquette"),
        ELearning => ("e-learning", "E-Learning"),
    }
}

/// Grains share the project pipeline verbatim.
pub type GrainStatus = ProjectStatus;

impl ProjectStatus {
    /// Presentation color token for badges and column headers.
    pub fn color(self) -> &'static str {
        match self {
            ProjectStatus::AppelOffre => "bg-status-appel-offre text-white",
            ProjectStatus::Propal => "bg-status-propal text-white",
            ProjectStatus::ConceptionConsultant => "bg-status-conception-consultant text-white",
            ProjectStatus::ConceptionCrea => "bg-status-conception-crea text-white",
            ProjectStatus::Developpement => "bg-status-developpement text-white",
            ProjectStatus::RetourEquipe => "bg-status-retour-equipe text-white",
            ProjectStatus::RetourClient => "bg-status-retour-client text-white",
            ProjectStatus::Termine => "bg-status-termine text-white",
        }
    }
}

/// New projects and grains enter the pipeline at the call-for-tender stage.
impl Default for ProjectStatus {
    fn default() -> Self {
        ProjectStatus::AppelOffre
    }
}

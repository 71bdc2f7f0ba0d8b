//! The eight artifact roles and their fixed file names.

use std::fmt;

use models::ArtifactKind;

/// Identity of one slot in the artifact store.
///
/// Each role maps to a fixed file name in the artifact directory. The names
/// are a path contract with the deployed artifact bundle and must not
/// change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactRole {
    HeroEncoder,
    HeroPredictor,
    GenreEncoder,
    GenrePredictor,
    TitleEncoder,
    TitlePredictor,
    RuntimePredictor,
    HeroFromTitlePredictor,
}

impl ArtifactRole {
    /// All roles, in load order
    pub const ALL: [ArtifactRole; 8] = [
        ArtifactRole::HeroEncoder,
        ArtifactRole::HeroPredictor,
        ArtifactRole::GenreEncoder,
        ArtifactRole::GenrePredictor,
        ArtifactRole::TitleEncoder,
        ArtifactRole::TitlePredictor,
        ArtifactRole::RuntimePredictor,
        ArtifactRole::HeroFromTitlePredictor,
    ];

    /// Fixed file name for this role in the artifact directory
    pub fn file_name(self) -> &'static str {
        match self {
            ArtifactRole::HeroEncoder => "1_heroname.pkl",
            ArtifactRole::HeroPredictor => "1_model.pkl",
            ArtifactRole::GenreEncoder => "2_genre.pkl",
            ArtifactRole::GenrePredictor => "2_model.pkl",
            ArtifactRole::TitleEncoder => "3_title.pkl",
            ArtifactRole::TitlePredictor => "3_model.pkl",
            ArtifactRole::RuntimePredictor => "4_model.pkl",
            ArtifactRole::HeroFromTitlePredictor => "5_model.pkl",
        }
    }

    /// Which capability the role's file must contain
    pub fn kind(self) -> ArtifactKind {
        match self {
            ArtifactRole::HeroEncoder | ArtifactRole::GenreEncoder | ArtifactRole::TitleEncoder => {
                ArtifactKind::Encoder
            }
            ArtifactRole::HeroPredictor
            | ArtifactRole::GenrePredictor
            | ArtifactRole::TitlePredictor
            | ArtifactRole::RuntimePredictor
            | ArtifactRole::HeroFromTitlePredictor => ArtifactKind::Predictor,
        }
    }
}

impl fmt::Display for ArtifactRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArtifactRole::HeroEncoder => "hero encoder",
            ArtifactRole::HeroPredictor => "hero predictor",
            ArtifactRole::GenreEncoder => "genre encoder",
            ArtifactRole::GenrePredictor => "genre predictor",
            ArtifactRole::TitleEncoder => "title encoder",
            ArtifactRole::TitlePredictor => "title predictor",
            ArtifactRole::RuntimePredictor => "runtime predictor",
            ArtifactRole::HeroFromTitlePredictor => "hero-from-title predictor",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_file_names_match_deployed_bundle() {
        assert_eq!(ArtifactRole::HeroEncoder.file_name(), "1_heroname.pkl");
        assert_eq!(ArtifactRole::HeroPredictor.file_name(), "1_model.pkl");
        assert_eq!(ArtifactRole::GenreEncoder.file_name(), "2_genre.pkl");
        assert_eq!(ArtifactRole::GenrePredictor.file_name(), "2_model.pkl");
        assert_eq!(ArtifactRole::TitleEncoder.file_name(), "3_title.pkl");
        assert_eq!(ArtifactRole::TitlePredictor.file_name(), "3_model.pkl");
        assert_eq!(ArtifactRole::RuntimePredictor.file_name(), "4_model.pkl");
        assert_eq!(
            ArtifactRole::HeroFromTitlePredictor.file_name(),
            "5_model.pkl"
        );
    }

    #[test]
    fn test_every_role_has_a_unique_file() {
        let names: HashSet<&str> = ArtifactRole::ALL.iter().map(|r| r.file_name()).collect();
        assert_eq!(names.len(), ArtifactRole::ALL.len());
    }

    #[test]
    fn test_expected_kinds() {
        assert_eq!(ArtifactRole::HeroEncoder.kind(), ArtifactKind::Encoder);
        assert_eq!(ArtifactRole::GenreEncoder.kind(), ArtifactKind::Encoder);
        assert_eq!(ArtifactRole::TitleEncoder.kind(), ArtifactKind::Encoder);
        assert_eq!(ArtifactRole::HeroPredictor.kind(), ArtifactKind::Predictor);
        assert_eq!(
            ArtifactRole::HeroFromTitlePredictor.kind(),
            ArtifactKind::Predictor
        );
    }
}

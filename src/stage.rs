use std::path::Path;

use enumset::EnumSetType;
use strum::{Display, EnumCount, EnumIter};

// The five programmable stages of the GLSL pipeline, in pipeline order.
#[derive(Debug, Hash, EnumSetType, Display, EnumCount, EnumIter)]
pub enum Stage {
    #[strum(serialize = "vertex")]
    Vertex,
    #[strum(serialize = "tessellation control")]
    TessControl,
    #[strum(serialize = "tessellation evaluation")]
    TessEval,
    #[strum(serialize = "geometry")]
    Geometry,
    #[strum(serialize = "fragment")]
    Fragment,
}

impl Stage {
    // Canonical file extension for shaders of this stage.
    pub fn extension(self) -> &'static str {
        match self {
            Stage::Vertex => "vs",
            Stage::TessControl => "tc",
            Stage::TessEval => "ts",
            Stage::Geometry => "gs",
            Stage::Fragment => "fs",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Stage::Vertex => "VS",
            Stage::TessControl => "TC",
            Stage::TessEval => "TS",
            Stage::Geometry => "GS",
            Stage::Fragment => "FS",
        }
    }

    pub fn from_extension(ext: &str) -> Option<Stage> {
        match ext {
            "vs" => Some(Stage::Vertex),
            "tc" => Some(Stage::TessControl),
            "ts" => Some(Stage::TessEval),
            "gs" => Some(Stage::Geometry),
            "fs" => Some(Stage::Fragment),
            _ => None,
        }
    }

    // Whether `path` carries this stage's extension. Compared case-sensitively
    // against everything after the last `.` of the whole path, so a dot in a
    // directory name counts when the file name itself has none.
    pub fn matches_path(self, path: &Path) -> bool {
        path.to_str()
            .and_then(|s| s.rsplit_once('.'))
            .is_some_and(|(_, ext)| ext == self.extension())
    }
}

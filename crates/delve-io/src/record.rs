use serde::{Deserialize, Serialize};

pub const RECORD_VERSION: u32 = 1;

fn default_version() -> u32 {
    RECORD_VERSION
}

/// One persisted chunk: its cell origin and every non-empty cell in its own
/// range as `[x, y, z, block_id]`, where `block_id` is the stored cell id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkRecord {
    #[serde(default = "default_version")]
    pub version: u32,
    pub origin: [i32; 3],
    #[serde(default)]
    pub entries: Vec<[i64; 4]>,
}

impl ChunkRecord {
    pub fn new(origin: [i32; 3]) -> Self {
        Self {
            version: RECORD_VERSION,
            origin,
            entries: Vec::new(),
        }
    }

    #[inline]
    pub fn push(&mut self, x: i32, y: i32, z: i32, block_id: u8) {
        self.entries
            .push([i64::from(x), i64::from(y), i64::from(z), i64::from(block_id)]);
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}

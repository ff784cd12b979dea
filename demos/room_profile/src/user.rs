use std::path::Path;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub avatar: String,
    pub name: String,
    pub followers: u32,
    pub following: u32,
}

impl Default for User {
    fn default() -> Self {
        Self {
            avatar: "https://www.gravatar.com/avatar/5c3dd2d257ff0e14dbd2583485dbd44b".into(),
            name: "Dave".into(),
            followers: 1234,
            following: 123,
        }
    }
}

impl User {
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("opening user file {}", path.display()))?;
        serde_json::from_reader(std::io::BufReader::new(file))
            .with_context(|| format!("parsing user file {}", path.display()))
    }
}

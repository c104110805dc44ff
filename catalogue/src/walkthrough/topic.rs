use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::Serialize;

use crate::error::CatalogueError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Arrays,
    Hashmaps,
    Sets,
    Strings,
    Systems,
    Modeling,
}

impl Topic {
    pub const ALL: [Topic; 6] =
        [Topic::Arrays, Topic::Hashmaps, Topic::Sets, Topic::Strings, Topic::Systems, Topic::Modeling];

    pub fn name(self) -> &'static str {
        match self {
            Topic::Arrays => "arrays",
            Topic::Hashmaps => "hashmaps",
            Topic::Sets => "sets",
            Topic::Strings => "strings",
            Topic::Systems => "systems",
            Topic::Modeling => "modeling",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Topic {
    type Err = CatalogueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Topic::ALL
            .into_iter()
            .find(|t| t.name() == wanted)
            .ok_or_else(|| CatalogueError::UnknownTopic(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Strings".parse::<Topic>(), Ok(Topic::Strings));
        assert_eq!(" sets ".parse::<Topic>(), Ok(Topic::Sets));
        assert_eq!("graphs".parse::<Topic>(), Err(CatalogueError::UnknownTopic("graphs".into())));
    }

    #[test]
    fn display_round_trips() {
        for topic in Topic::ALL {
            assert_eq!(topic.to_string().parse::<Topic>(), Ok(topic));
        }
    }
}

use std::collections::{HashMap, HashSet};

/// Undirected friendship graph.
#[derive(Debug, Default)]
pub struct SocialNetwork {
    friends: HashMap<String, HashSet<String>>,
}

fn sorted(set: HashSet<&String>) -> Vec<String> {
    let mut out: Vec<String> = set.into_iter().cloned().collect();
    out.sort_unstable();
    out
}

impl SocialNetwork {
    pub fn new() -> Self { Self::default() }

    pub fn add_friendship(&mut self, a: &str, b: &str) {
        self.friends.entry(a.to_owned()).or_default().insert(b.to_owned());
        self.friends.entry(b.to_owned()).or_default().insert(a.to_owned());
    }

    pub fn friends_of(&self, person: &str) -> Vec<String> {
        self.friends.get(person).map_or_else(Vec::new, |f| sorted(f.iter().collect()))
    }

    pub fn mutual_friends(&self, a: &str, b: &str) -> Vec<String> {
        match (self.friends.get(a), self.friends.get(b)) {
            (Some(fa), Some(fb)) => sorted(fa.intersection(fb).collect()),
            _ => Vec::new(),
        }
    }

    /// Friends of friends who are neither the person nor already a friend.
    pub fn friend_suggestions(&self, person: &str) -> Vec<String> {
        let Some(direct) = self.friends.get(person) else {
            return Vec::new();
        };
        let candidates: HashSet<&String> = direct
            .iter()
            .filter_map(|f| self.friends.get(f))
            .flatten()
            .filter(|c| c.as_str() != person && !direct.contains(*c))
            .collect();
        sorted(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network() -> SocialNetwork {
        let mut net = SocialNetwork::new();
        net.add_friendship("alice", "bob");
        net.add_friendship("alice", "carol");
        net.add_friendship("bob", "dave");
        net.add_friendship("carol", "dave");
        net.add_friendship("dave", "erin");
        net
    }

    #[test]
    fn mutual() {
        let net = network();
        assert_eq!(net.mutual_friends("alice", "dave"), vec!["bob", "carol"]);
        assert!(net.mutual_friends("alice", "zed").is_empty());
    }

    #[test]
    fn suggestions_exclude_self_and_friends() {
        let net = network();
        assert_eq!(net.friend_suggestions("alice"), vec!["dave"]);
        assert_eq!(net.friend_suggestions("dave"), vec!["alice"]);
        assert!(net.friend_suggestions("nobody").is_empty());
        assert_eq!(net.friends_of("bob"), vec!["alice", "dave"]);
    }
}

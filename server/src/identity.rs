use common::UserId;

/// Who is on the other end of a connection.
///
/// The identifier is opaque: whatever authentication sits in front of the
/// server hands it over as the `user` query parameter and the server never
/// looks inside. Anonymous players play without score persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerIdentity {
    User(UserId),
    Anonymous,
}

impl PlayerIdentity {
    pub fn from_user_param(param: Option<String>) -> Self {
        match param {
            Some(id) if !id.trim().is_empty() => PlayerIdentity::User(UserId::new(id)),
            _ => PlayerIdentity::Anonymous,
        }
    }

    pub fn user_id(&self) -> Option<&UserId> {
        match self {
            PlayerIdentity::User(id) => Some(id),
            PlayerIdentity::Anonymous => None,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            PlayerIdentity::User(id) => id.as_str(),
            PlayerIdentity::Anonymous => "anonymous",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_or_blank_param_is_anonymous() {
        assert_eq!(PlayerIdentity::from_user_param(None), PlayerIdentity::Anonymous);
        assert_eq!(
            PlayerIdentity::from_user_param(Some("   ".to_string())),
            PlayerIdentity::Anonymous
        );
    }

    #[test]
    fn test_user_param_becomes_user_identity() {
        let identity = PlayerIdentity::from_user_param(Some("user-1".to_string()));
        assert_eq!(identity.user_id().map(|u| u.as_str()), Some("user-1"));
        assert_eq!(identity.label(), "user-1");
    }
}

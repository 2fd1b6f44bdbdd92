//! Owner join: attach users to posts, comments and likes.
//!
//! `join_users` is a left-outer join on owner reference == user id.
//! `attach_owner` then flattens the joined users into owner columns and
//! decides what happens when nothing matched.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::error::{AppError, Result};
use crate::metrics::feed::FEED_MISSING_OWNER_SKIPPED;
use crate::models::{Joined, OwnedRecord, OwnerFields, User, WithOwner};

/// What to do with a record whose owner reference matches no user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingOwnerPolicy {
    /// Abort the request with `AppError::DataIntegrity`
    #[default]
    Fail,
    /// Drop the record, log a warning and count it
    Skip,
}

impl FromStr for MissingOwnerPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail" => Ok(Self::Fail),
            "skip" => Ok(Self::Skip),
            other => Err(format!(
                "unknown missing-owner policy '{}', expected 'fail' or 'skip'",
                other
            )),
        }
    }
}

impl fmt::Display for MissingOwnerPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fail => f.write_str("fail"),
            Self::Skip => f.write_str("skip"),
        }
    }
}

/// Attach every user whose id equals the record's owner reference.
///
/// Matches keep user-collection order and are never deduplicated, so a
/// duplicated user id yields more than one entry in `user_details`.
pub fn join_users<T: OwnedRecord>(records: Vec<T>, users: &[User]) -> Vec<Joined<T>> {
    let mut by_id: HashMap<&str, Vec<&User>> = HashMap::with_capacity(users.len());
    for user in users {
        by_id.entry(user.id.as_str()).or_default().push(user);
    }

    records
        .into_iter()
        .map(|record| {
            let user_details = by_id
                .get(record.owner_id())
                .map(|matches| matches.iter().map(|u| (*u).clone()).collect())
                .unwrap_or_default();
            Joined {
                record,
                user_details,
            }
        })
        .collect()
}

/// Flatten joined users into owner columns; the first match wins.
///
/// `collection` names the source collection in errors, logs and metrics.
pub fn attach_owner<T: OwnedRecord>(
    joined: Vec<Joined<T>>,
    policy: MissingOwnerPolicy,
    collection: &'static str,
) -> Result<Vec<WithOwner<T>>> {
    resolve_owners(joined, policy, collection, |joined, owner| WithOwner {
        record: joined.record,
        owner,
    })
}

/// Like `attach_owner`, but the `userDetails` array stays on the record.
pub fn attach_owner_keeping_details<T: OwnedRecord>(
    joined: Vec<Joined<T>>,
    policy: MissingOwnerPolicy,
    collection: &'static str,
) -> Result<Vec<WithOwner<Joined<T>>>> {
    resolve_owners(joined, policy, collection, |joined, owner| WithOwner {
        record: joined,
        owner,
    })
}

fn resolve_owners<T, R, F>(
    joined: Vec<Joined<T>>,
    policy: MissingOwnerPolicy,
    collection: &'static str,
    build: F,
) -> Result<Vec<R>>
where
    T: OwnedRecord,
    F: Fn(Joined<T>, OwnerFields) -> R,
{
    let mut out = Vec::with_capacity(joined.len());

    for item in joined {
        let Some(owner) = item.user_details.first().map(OwnerFields::from) else {
            let record = &item.record;
            match policy {
                MissingOwnerPolicy::Fail => {
                    return Err(AppError::DataIntegrity(format!(
                        "{} {} references missing user {}",
                        collection,
                        record.record_id(),
                        record.owner_id()
                    )));
                }
                MissingOwnerPolicy::Skip => {
                    warn!(
                        collection,
                        record_id = record.record_id(),
                        owner_id = record.owner_id(),
                        "skipping record with unresolved owner"
                    );
                    FEED_MISSING_OWNER_SKIPPED
                        .with_label_values(&[collection])
                        .inc();
                    continue;
                }
            }
        };

        out.push(build(item, owner));
    }

    Ok(out)
}

/// `join_users` followed by `attach_owner`.
pub fn join_owner<T: OwnedRecord>(
    records: Vec<T>,
    users: &[User],
    policy: MissingOwnerPolicy,
    collection: &'static str,
) -> Result<Vec<WithOwner<T>>> {
    attach_owner(join_users(records, users), policy, collection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Like;

    fn user(id: &str, name: &str) -> User {
        User {
            id: id.into(),
            full_name: name.into(),
            username: name.to_lowercase(),
            user_profile_photo: format!("{}.png", name),
        }
    }

    fn like(id: &str, owner: &str) -> Like {
        Like {
            id: id.into(),
            user_id: owner.into(),
            post_id: "p1".into(),
        }
    }

    #[test]
    fn attaches_only_matching_users() {
        let users = vec![user("u1", "Ada"), user("u2", "Grace")];
        let joined = join_users(vec![like("l1", "u2"), like("l2", "u1")], &users);

        assert_eq!(joined.len(), 2);
        assert_eq!(joined[0].user_details, vec![user("u2", "Grace")]);
        assert_eq!(joined[1].user_details, vec![user("u1", "Ada")]);
    }

    #[test]
    fn unmatched_owner_gets_empty_details() {
        let users = vec![user("u1", "Ada")];
        let joined = join_users(vec![like("l1", "u99")], &users);

        assert_eq!(joined.len(), 1);
        assert!(joined[0].user_details.is_empty());
    }

    #[test]
    fn duplicate_user_ids_are_all_attached_first_wins_on_flatten() {
        let users = vec![user("u1", "Ada"), user("u1", "Impostor")];
        let joined = join_users(vec![like("l1", "u1")], &users);
        assert_eq!(joined[0].user_details.len(), 2);

        let flat = attach_owner(joined, MissingOwnerPolicy::Fail, "like").unwrap();
        assert_eq!(flat[0].owner.user_full_name, "Ada");
    }

    #[test]
    fn fail_policy_reports_data_integrity() {
        let users = vec![user("u1", "Ada")];
        let err = join_owner(
            vec![like("l1", "u1"), like("l2", "u99")],
            &users,
            MissingOwnerPolicy::Fail,
            "like",
        )
        .unwrap_err();

        match err {
            AppError::DataIntegrity(msg) => {
                assert!(msg.contains("l2"));
                assert!(msg.contains("u99"));
            }
            other => panic!("expected DataIntegrity, got {:?}", other),
        }
    }

    #[test]
    fn skip_policy_drops_only_orphans() {
        let users = vec![user("u1", "Ada")];
        let flat = join_owner(
            vec![like("l1", "u99"), like("l2", "u1"), like("l3", "u98")],
            &users,
            MissingOwnerPolicy::Skip,
            "like",
        )
        .unwrap();

        assert_eq!(flat.len(), 1);
        assert_eq!(flat[0].record.id, "l2");
        assert_eq!(flat[0].owner.username, "ada");
    }

    #[test]
    fn keeping_details_flattens_first_match_and_keeps_array() {
        let users = vec![user("u1", "Ada"), user("u1", "Impostor")];
        let joined = join_users(vec![like("l1", "u1"), like("l2", "u99")], &users);

        let flat =
            attach_owner_keeping_details(joined, MissingOwnerPolicy::Skip, "like").unwrap();
        assert_eq!(flat.len(), 1);
        assert_eq!(flat[0].owner.user_full_name, "Ada");
        assert_eq!(flat[0].record.user_details.len(), 2);
        assert_eq!(flat[0].record.record.id, "l1");
    }

    #[test]
    fn policy_parses_case_insensitively() {
        assert_eq!("SKIP".parse::<MissingOwnerPolicy>(), Ok(MissingOwnerPolicy::Skip));
        assert_eq!(" fail ".parse::<MissingOwnerPolicy>(), Ok(MissingOwnerPolicy::Fail));
        assert!("ignore".parse::<MissingOwnerPolicy>().is_err());
    }
}

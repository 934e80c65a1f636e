//! Access filtering of navigation entries.

use evalboard_auth::{AccessCheckError, AccessChecker, AccessOperation};

use crate::entry::NavigationEntry;

/// Keep the entries the checker allows the session to READ, in input order.
///
/// A failing capability check is returned as-is: it indicates a broken
/// authorization integration, which the page shell reports.
pub fn filter_visible<C>(
    entries: impl IntoIterator<Item = NavigationEntry>,
    checker: &C,
) -> Result<Vec<NavigationEntry>, AccessCheckError>
where
    C: AccessChecker + ?Sized,
{
    let mut visible = Vec::new();
    for entry in entries {
        if checker.has_access(&entry.entity, AccessOperation::Read, entry.service)? {
            visible.push(entry);
        }
    }
    Ok(visible)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashSet;

    use evalboard_auth::{AccessService, CheckFn};
    use proptest::prelude::*;

    use crate::entry::NavigationCatalog;

    fn allow(entities: &'static [&'static str]) -> impl AccessChecker {
        CheckFn::new(move |entity, _, _| Ok(entities.contains(&entity)))
    }

    #[test]
    fn keeps_allowed_entries_in_order() {
        let visible = filter_visible(
            NavigationCatalog::standard().entries().to_vec(),
            &allow(&["performance_evaluation", "user"]),
        )
        .unwrap();

        let names: Vec<&str> = visible.iter().map(|e| e.name.as_ref()).collect();
        assert_eq!(names, vec!["Users", "Performance Evaluation"]);
    }

    #[test]
    fn checks_read_in_the_entry_service() {
        let seen = RefCell::new(Vec::new());
        let checker = CheckFn::new(|entity: &str, op, service| {
            seen.borrow_mut().push((entity.to_string(), op, service));
            Ok(true)
        });

        filter_visible(NavigationCatalog::standard().entries().to_vec(), &checker).unwrap();

        let seen = seen.into_inner();
        assert_eq!(seen.len(), 4);
        assert!(
            seen.iter()
                .all(|(_, op, s)| *op == AccessOperation::Read && *s == AccessService::Project)
        );
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let visible = filter_visible(NavigationCatalog::standard().entries().to_vec(), &allow(&[]))
            .unwrap();
        assert!(visible.is_empty());
    }

    #[test]
    fn check_failure_propagates() {
        let checker = CheckFn::new(|entity: &str, _, _| {
            if entity == "employee" {
                Err(AccessCheckError::Unavailable("timeout".to_string()))
            } else {
                Ok(true)
            }
        });

        let err = filter_visible(NavigationCatalog::standard().entries().to_vec(), &checker)
            .unwrap_err();
        assert_eq!(err, AccessCheckError::Unavailable("timeout".to_string()));
    }

    proptest! {
        #[test]
        fn result_is_ordered_subsequence_of_allowed(mask in prop::collection::vec(any::<bool>(), 4)) {
            let entries = NavigationCatalog::standard().entries().to_vec();
            let allowed: HashSet<String> = entries
                .iter()
                .zip(&mask)
                .filter(|(_, keep)| **keep)
                .map(|(e, _)| e.entity.to_string())
                .collect();
            let checker = CheckFn::new(|entity: &str, _, _| Ok(allowed.contains(entity)));

            let visible = filter_visible(entries.clone(), &checker).unwrap();

            let expected: Vec<NavigationEntry> = entries
                .into_iter()
                .filter(|e| allowed.contains(&*e.entity))
                .collect();
            prop_assert_eq!(visible, expected);
        }
    }
}

//! Active-route detection.

/// Whether a navigation entry pointing at `entry_path` should render as
/// active while the router is on `current_path`.
///
/// Exact matches are active. Otherwise a section is active for its nested
/// sub-routes (`/employees` for `/employees/123`), except the root `/`,
/// which only ever matches exactly.
pub fn is_active(current_path: &str, entry_path: &str) -> bool {
    current_path == entry_path || (entry_path != "/" && current_path.starts_with(entry_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn exact_match_is_active() {
        assert!(is_active("/employees", "/employees"));
        assert!(is_active("/", "/"));
    }

    #[test]
    fn nested_route_activates_section() {
        assert!(is_active("/employees/123", "/employees"));
        assert!(is_active("/organizations/view/O1", "/organizations"));
    }

    #[test]
    fn root_requires_exact_match() {
        assert!(!is_active("/employees", "/"));
    }

    #[test]
    fn unrelated_paths_are_inactive() {
        assert!(!is_active("/users", "/employees"));
        assert!(!is_active("/employees", "/employees/123"));
    }

    #[test]
    fn matching_is_a_plain_prefix_check() {
        // No segment awareness: "/employees-archive" sits under "/employees".
        assert!(is_active("/employees-archive", "/employees"));
    }

    proptest! {
        #[test]
        fn active_iff_equal_or_non_root_prefix(p in "/[a-z/]{0,12}", e in "/[a-z/]{0,6}") {
            let expected = p == e || (e != "/" && p.starts_with(e.as_str()));
            prop_assert_eq!(is_active(&p, &e), expected);
        }

        #[test]
        fn every_path_is_active_for_itself(p in "/[a-z0-9/-]{0,16}") {
            prop_assert!(is_active(&p, &p));
        }
    }
}

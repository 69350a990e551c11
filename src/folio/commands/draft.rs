//! Scratch-buffer edits for a draft's technology and feature lists.
//!
//! Entries are trimmed on insert, deduplicated by exact string match,
//! and appended at the end. The buffers live on the draft until
//! `add`/`update` commits the whole record at once.

/// Appends `candidate` if it is non-blank after trimming and not
/// already present. Returns whether the list changed.
pub fn add_entry(entries: &mut Vec<String>, candidate: &str) -> bool {
    let trimmed = candidate.trim();
    if trimmed.is_empty() || entries.iter().any(|e| e == trimmed) {
        return false;
    }
    entries.push(trimmed.to_string());
    true
}

/// Removes the exact match for `value`. Returns whether the list
/// changed.
pub fn remove_entry(entries: &mut Vec<String>, value: &str) -> bool {
    match entries.iter().position(|e| e == value) {
        Some(pos) => {
            entries.remove(pos);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_trimmed_entry_at_the_end() {
        let mut entries = vec!["Kotlin".to_string()];
        assert!(add_entry(&mut entries, "  Firebase  "));
        assert_eq!(entries, vec!["Kotlin", "Firebase"]);
    }

    #[test]
    fn adding_twice_keeps_a_single_entry() {
        let mut entries = Vec::new();
        assert!(add_entry(&mut entries, "Kotlin"));
        assert!(!add_entry(&mut entries, "Kotlin"));
        assert!(!add_entry(&mut entries, " Kotlin "));
        assert_eq!(entries, vec!["Kotlin"]);
    }

    #[test]
    fn dedup_is_case_sensitive() {
        let mut entries = Vec::new();
        assert!(add_entry(&mut entries, "Kotlin"));
        assert!(add_entry(&mut entries, "kotlin"));
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn blank_candidate_is_rejected() {
        let mut entries = Vec::new();
        assert!(!add_entry(&mut entries, ""));
        assert!(!add_entry(&mut entries, "   "));
        assert!(entries.is_empty());
    }

    #[test]
    fn removes_exact_match_only() {
        let mut entries = vec!["Kotlin".to_string(), "Firebase".to_string()];
        assert!(remove_entry(&mut entries, "Kotlin"));
        assert!(!remove_entry(&mut entries, "kotlin"));
        assert_eq!(entries, vec!["Firebase"]);
    }

    #[test]
    fn removing_missing_value_is_a_no_op() {
        let mut entries = vec!["Kotlin".to_string()];
        assert!(!remove_entry(&mut entries, "Rust"));
        assert_eq!(entries, vec!["Kotlin"]);
    }
}

    use super::*;

    fn ids(entry: &PlanEntry) -> Vec<i64> {
        entry.tab_ids.iter().map(|id| id.0).collect()
    }

    #[test]
    fn test_merge_by_trimmed_name() {
        let suggestions = vec![
            Suggestion::new("Work", vec![TabId(1)]),
            Suggestion::new("  Work ", vec![TabId(2)]),
            Suggestion::new("News", vec![TabId(3)]),
        ];
        let plan = merge_suggestions(&suggestions, &[]);

        assert_eq!(plan.len(), 2);
        assert_eq!(plan.entries()[0].name, "Work");
        assert_eq!(ids(&plan.entries()[0]), vec![1, 2]);
        assert_eq!(plan.entries()[1].name, "News");
    }

    #[test]
    fn test_union_without_duplicates() {
        let suggestions = vec![
            Suggestion::new("Work", vec![TabId(1), TabId(2)]),
            Suggestion::new("Work", vec![TabId(2), TabId(3)]),
        ];
        let plan = merge_suggestions(&suggestions, &[]);
        assert_eq!(ids(&plan.entries()[0]), vec![1, 2, 3]);
    }

    #[test]
    fn test_order_follows_first_occurrence() {
        let suggestions = vec![
            Suggestion::new("B", vec![TabId(1)]),
            Suggestion::new("A", vec![TabId(2)]),
            Suggestion::new("B", vec![TabId(3)]),
        ];
        let plan = merge_suggestions(&suggestions, &[]);
        let names: Vec<&str> = plan.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn test_failed_chunk_tabs_go_to_miscellaneous() {
        let suggestions = vec![Suggestion::new("X", vec![TabId(1)])];
        let failed = vec![
            TabRecord::new(2, "b", "https://b.com"),
            TabRecord::new(3, "c", "https://c.com"),
        ];
        let plan = merge_suggestions(&suggestions, &failed);

        assert_eq!(plan.len(), 2);
        assert_eq!(plan.entries()[0].name, "X");
        assert_eq!(ids(&plan.entries()[0]), vec![1]);
        assert_eq!(plan.entries()[1].name, MergedPlan::MISCELLANEOUS);
        assert_eq!(ids(&plan.entries()[1]), vec![2, 3]);
    }

    #[test]
    fn test_claimed_failed_tab_not_forced_into_miscellaneous() {
        // The AI referenced tab 2 across a chunk boundary before that
        // chunk failed.
        let suggestions = vec![Suggestion::new("X", vec![TabId(1), TabId(2)])];
        let failed = vec![
            TabRecord::new(2, "b", "https://b.com"),
            TabRecord::new(3, "c", "https://c.com"),
        ];
        let plan = merge_suggestions(&suggestions, &failed);

        assert_eq!(ids(&plan.entries()[0]), vec![1, 2]);
        assert_eq!(ids(&plan.entries()[1]), vec![3]);
    }

    #[test]
    fn test_existing_miscellaneous_absorbs_failed_tabs() {
        let suggestions = vec![
            Suggestion::new("Miscellaneous", vec![TabId(1)]),
            Suggestion::new("Work", vec![TabId(2)]),
        ];
        let failed = vec![TabRecord::new(3, "c", "https://c.com")];
        let plan = merge_suggestions(&suggestions, &failed);

        assert_eq!(plan.len(), 2);
        assert_eq!(plan.entries()[0].name, MergedPlan::MISCELLANEOUS);
        assert_eq!(ids(&plan.entries()[0]), vec![1, 3]);
    }

    #[test]
    fn test_empty_groups_dropped() {
        let suggestions = vec![
            Suggestion::new("Empty", vec![]),
            Suggestion::new("Full", vec![TabId(1)]),
        ];
        let plan = merge_suggestions(&suggestions, &[]);
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.entries()[0].name, "Full");
    }

    #[test]
    fn test_union_property() {
        // Union of merged ids == union of input ids plus failed-chunk ids.
        let suggestions = vec![
            Suggestion::new("A", vec![TabId(1), TabId(2)]),
            Suggestion::new("B", vec![TabId(3)]),
            Suggestion::new("A", vec![TabId(4)]),
        ];
        let failed = vec![TabRecord::new(5, "e", "https://e.com")];
        let plan = merge_suggestions(&suggestions, &failed);

        let mut all: Vec<i64> = plan.entries().iter().flat_map(ids).collect();
        all.sort_unstable();
        assert_eq!(all, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_empty_inputs() {
        let plan = merge_suggestions(&[], &[]);
        assert!(plan.is_empty());
    }

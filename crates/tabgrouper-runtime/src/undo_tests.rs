    use super::*;

    use tabgrouper_protocols::types::{MergedPlan, PlanEntry, TabRecord};

    use crate::apply::GroupApplier;
    use crate::testing::MemoryTabSurface;

    fn tabs() -> Vec<TabRecord> {
        vec![
            TabRecord::new(1, "mail", "https://mail.example.com").at_index(0),
            TabRecord::new(2, "docs", "https://docs.example.com").at_index(1),
            TabRecord::new(3, "news", "https://news.example.com")
                .at_index(2)
                .grouped(GroupId(40)),
        ]
    }

    async fn apply_plan(
        surface: &Arc<MemoryTabSurface>,
        tabs: &[TabRecord],
        entries: Vec<PlanEntry>,
    ) -> UndoSnapshot {
        let applier = GroupApplier::new(surface.clone() as Arc<dyn TabSurface>);
        let (_, snapshot) = applier
            .apply(&MergedPlan::from_entries(entries), tabs)
            .await;
        snapshot
    }

    #[tokio::test]
    async fn test_restore_returns_tabs_to_original_state() {
        let tabs = tabs();
        let surface = Arc::new(MemoryTabSurface::new(tabs.clone()));
        let snapshot = apply_plan(
            &surface,
            &tabs,
            vec![PlanEntry::new("Work", vec![TabId(1), TabId(2), TabId(3)])],
        )
        .await;

        let manager = UndoManager::new(surface.clone());
        let report = manager.restore(snapshot).await;

        assert!(report.is_clean());
        assert_eq!(report.tabs_restored, 3);
        assert_eq!(report.tabs_skipped, 0);
        assert_eq!(report.groups_removed, 1);

        assert_eq!(surface.tab(TabId(1)).unwrap().group_id, None);
        assert_eq!(surface.tab(TabId(2)).unwrap().group_id, None);
        // Tab 3 returns to its pre-run group.
        assert_eq!(surface.tab(TabId(3)).unwrap().group_id, Some(GroupId(40)));
        assert_eq!(surface.tab(TabId(3)).unwrap().index, 2);
    }

    #[tokio::test]
    async fn test_closed_tabs_are_skipped() {
        let tabs = tabs();
        let surface = Arc::new(MemoryTabSurface::new(tabs.clone()));
        let snapshot = apply_plan(
            &surface,
            &tabs,
            vec![PlanEntry::new("Work", vec![TabId(1), TabId(2)])],
        )
        .await;

        surface.close_tab(TabId(2));

        let manager = UndoManager::new(surface.clone());
        let report = manager.restore(snapshot).await;

        assert!(report.is_clean());
        assert_eq!(report.tabs_skipped, 1);
        assert_eq!(report.tabs_restored, 2);
        assert_eq!(surface.tab(TabId(1)).unwrap().group_id, None);
    }

    #[tokio::test]
    async fn test_already_removed_group_counts_as_removed() {
        let tabs = vec![TabRecord::new(1, "a", "https://a.com")];
        let surface = Arc::new(MemoryTabSurface::new(tabs.clone()));
        let snapshot = apply_plan(
            &surface,
            &tabs,
            vec![PlanEntry::new("Solo", vec![TabId(1)])],
        )
        .await;

        // The user dissolved the group before undoing.
        let created = snapshot.created_group_ids[0];
        surface.remove_group(created).await.unwrap();

        let manager = UndoManager::new(surface.clone());
        let report = manager.restore(snapshot).await;

        assert!(report.is_clean());
        assert_eq!(report.groups_removed, 1);
        assert!(report.group_failures.is_empty());
    }

    #[tokio::test]
    async fn test_empty_snapshot_is_a_clean_noop() {
        let surface = Arc::new(MemoryTabSurface::new(Vec::new()));
        let manager = UndoManager::new(surface);
        let report = manager.restore(UndoSnapshot::default()).await;

        assert!(report.is_clean());
        assert_eq!(report.tabs_restored, 0);
        assert_eq!(report.groups_removed, 0);
    }

    #[tokio::test]
    async fn test_restore_after_partial_apply() {
        // Only one of two entries applied; undo still restores everything
        // the snapshot covers and removes the one created group.
        let tabs = vec![
            TabRecord::new(1, "a", "https://a.com").at_index(0),
            TabRecord::new(2, "b", "https://b.com").at_index(1),
        ];
        let surface = Arc::new(MemoryTabSurface::new(tabs.clone()));
        let snapshot = apply_plan(
            &surface,
            &tabs,
            vec![
                PlanEntry::new("Ok", vec![TabId(1)]),
                PlanEntry::new("Broken", vec![TabId(99)]),
            ],
        )
        .await;
        assert_eq!(snapshot.created_group_ids.len(), 1);

        let manager = UndoManager::new(surface.clone());
        let report = manager.restore(snapshot).await;

        assert!(report.is_clean());
        assert_eq!(surface.group_count(), 0);
        assert_eq!(surface.tab(TabId(1)).unwrap().group_id, None);
        assert_eq!(report.tabs_restored, 2);
    }

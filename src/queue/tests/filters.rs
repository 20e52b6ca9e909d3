//! Storage and retrieval filter stack tests

#[cfg(test)]
mod tests {
    use crate::queue::api::{
        FilterDesc, FilterStage, InfoQueue, InfoQueueFilter, MessageCategory, MessageId,
        MessageSeverity, QueueConfig,
    };
    use crate::queue::tests::helpers::{add, descriptions};

    fn deny_severities(severities: &[MessageSeverity]) -> InfoQueueFilter {
        InfoQueueFilter::deny(FilterDesc::default().with_severities(severities.iter().copied()))
    }

    #[test]
    fn test_storage_filter_denies_and_counts() {
        let queue = InfoQueue::new();
        queue.push_storage_filter(deny_severities(&[MessageSeverity::Info]));

        add(&queue, MessageSeverity::Info, 1, "info");
        add(&queue, MessageSeverity::Warning, 2, "warning");

        assert_eq!(descriptions(&queue), vec!["warning"]);
        assert_eq!(queue.num_messages_denied_by_storage_filter(), 1);
        assert_eq!(queue.num_messages_allowed_by_storage_filter(), 1);
    }

    #[test]
    fn test_retrieval_view_consistency() {
        let queue = InfoQueue::new();
        let severities = [
            MessageSeverity::Error,
            MessageSeverity::Info,
            MessageSeverity::Error,
            MessageSeverity::Warning,
            MessageSeverity::Error,
        ];
        for (i, severity) in severities.iter().enumerate() {
            add(&queue, *severity, i as u32, &format!("msg-{i}"));
        }

        queue.push_retrieval_filter(InfoQueueFilter::allow(
            FilterDesc::default().with_severities([MessageSeverity::Error]),
        ));

        let count = queue.num_stored_messages_allowed_by_retrieval_filter();
        assert_eq!(count, 3);
        let visible: Vec<String> = (0..count)
            .map(|i| queue.get_message(i).unwrap().description.clone())
            .collect();
        assert_eq!(visible, vec!["msg-0", "msg-2", "msg-4"]);
        assert!(queue.get_message(count).is_err());
    }

    #[test]
    fn test_retrieval_filter_is_a_pure_view() {
        let queue = InfoQueue::new();
        for i in 0..4 {
            add(&queue, MessageSeverity::Info, i, "m");
        }
        let before = queue.stats();

        queue.push_retrieval_filter(deny_severities(&[MessageSeverity::Info]));
        assert_eq!(queue.num_stored_messages_allowed_by_retrieval_filter(), 0);
        assert!(queue.try_get_message(0).is_none());

        let during = queue.stats();
        assert_eq!(during.stored, before.stored);
        assert_eq!(during.allowed_by_storage_filter, before.allowed_by_storage_filter);
        assert_eq!(during.denied_by_storage_filter, before.denied_by_storage_filter);

        queue.pop_filter(FilterStage::Retrieval);
        assert_eq!(queue.num_stored_messages_allowed_by_retrieval_filter(), 4);
    }

    #[test]
    fn test_view_reflects_filter_changes_between_calls() {
        let queue = InfoQueue::new();
        add(&queue, MessageSeverity::Info, 1, "info");
        add(&queue, MessageSeverity::Error, 2, "error");

        assert_eq!(queue.get_message(0).unwrap().description, "info");

        queue.push_retrieval_filter(deny_severities(&[MessageSeverity::Info]));
        assert_eq!(queue.get_message(0).unwrap().description, "error");

        add(&queue, MessageSeverity::Error, 3, "error-2");
        assert_eq!(queue.get_message(1).unwrap().description, "error-2");
    }

    #[test]
    fn test_only_top_frame_applies() {
        let queue = InfoQueue::new();
        queue.push_storage_filter(deny_severities(&[MessageSeverity::Info]));
        queue.push_empty_filter(FilterStage::Storage);

        add(&queue, MessageSeverity::Info, 1, "passes");
        assert_eq!(queue.num_messages_denied_by_storage_filter(), 0);

        queue.pop_filter(FilterStage::Storage);
        add(&queue, MessageSeverity::Info, 2, "blocked");
        assert_eq!(queue.num_messages_denied_by_storage_filter(), 1);
        assert_eq!(descriptions(&queue), vec!["passes"]);
    }

    #[test]
    fn test_stack_operations_through_queue() {
        let queue = InfoQueue::new();
        let stage = FilterStage::Retrieval;

        assert_eq!(queue.filter_stack_size(stage), 0);
        assert_eq!(queue.get_filter(stage), None);
        assert_eq!(queue.pop_filter(stage), None);

        let base = deny_severities(&[MessageSeverity::Message]);
        queue.push_filter(stage, base.clone());
        queue.push_copy_of_filter(stage);
        assert_eq!(queue.filter_stack_size(stage), 2);
        assert_eq!(queue.get_filter(stage), Some(base.clone()));

        queue.add_filter_entries(
            stage,
            &InfoQueueFilter::deny(FilterDesc::default().with_ids([MessageId(5)])),
        );
        let top = queue.get_filter(stage).unwrap();
        assert_eq!(top.deny.severities, vec![MessageSeverity::Message]);
        assert_eq!(top.deny.ids, vec![MessageId(5)]);

        queue.clear_filter(stage);
        assert_eq!(queue.get_filter(stage), Some(InfoQueueFilter::allow_all()));

        assert_eq!(queue.pop_filter(stage), Some(InfoQueueFilter::allow_all()));
        assert_eq!(queue.pop_filter(stage), Some(base));
        assert_eq!(queue.filter_stack_size(stage), 0);

        // The storage stack was never touched
        assert_eq!(queue.filter_stack_size(FilterStage::Storage), 0);
    }

    #[test]
    fn test_add_entries_on_empty_stack_pushes_frame() {
        let queue = InfoQueue::new();
        queue.add_filter_entries(
            FilterStage::Storage,
            &InfoQueueFilter::allow(
                FilterDesc::default().with_categories([MessageCategory::Compilation]),
            ),
        );
        assert_eq!(queue.filter_stack_size(FilterStage::Storage), 1);

        queue.add_message(
            MessageCategory::Execution,
            MessageSeverity::Error,
            MessageId(1),
            "not compilation".to_string(),
        );
        queue.add_message(
            MessageCategory::Compilation,
            MessageSeverity::Error,
            MessageId(2),
            "shader failed".to_string(),
        );
        assert_eq!(descriptions(&queue), vec!["shader failed"]);
    }

    #[test]
    fn test_from_config_pushes_frames_in_order() {
        let config: QueueConfig = toml::from_str(
            r#"
            message-count-limit = 5

            [[storage-filter]]
            deny = { severities = ["message"] }

            [[storage-filter]]
            deny = { severities = ["info"] }

            [[retrieval-filter]]
            allow = { categories = ["execution"] }
            "#,
        )
        .unwrap();

        let queue = InfoQueue::from_config(&config).unwrap();
        assert_eq!(queue.message_count_limit(), 5);
        assert_eq!(queue.filter_stack_size(FilterStage::Storage), 2);
        assert_eq!(
            queue.get_filter(FilterStage::Storage),
            Some(deny_severities(&[MessageSeverity::Info]))
        );

        // Only the last storage frame is active: Message passes, Info does not
        add(&queue, MessageSeverity::Message, 1, "chatter");
        add(&queue, MessageSeverity::Info, 2, "info");
        assert_eq!(queue.num_messages_denied_by_storage_filter(), 1);
        assert_eq!(queue.num_stored_messages(), 1);

        queue.add_application_message(MessageSeverity::Warning, "app".to_string());
        assert_eq!(queue.num_stored_messages(), 2);
        assert_eq!(queue.num_stored_messages_allowed_by_retrieval_filter(), 1);
    }
}

#[cfg(test)]
mod upload_flow_tests {
    use std::sync::Arc;
    use std::time::Duration;

    use parking_lot::Mutex;
    use tokio::runtime::Handle;

    use cloud_quick::upload::{
        Notification, NotificationKind, Notifier, SelectedFile, UploadStatus, UploadStore,
    };

    #[derive(Default)]
    struct RecordingNotifier {
        sent: Mutex<Vec<Notification>>,
    }

    impl RecordingNotifier {
        fn snapshot(&self) -> Vec<Notification> {
            self.sent.lock().clone()
        }

        fn messages(&self) -> Vec<String> {
            self.sent.lock().iter().map(|n| n.message.clone()).collect()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notification: Notification) {
            self.sent.lock().push(notification);
        }
    }

    fn test_store() -> (UploadStore, Arc<RecordingNotifier>) {
        let recorder = Arc::new(RecordingNotifier::default());
        let store = UploadStore::new(Handle::current(), recorder.clone());
        (store, recorder)
    }

    #[tokio::test(start_paused = true)]
    async fn test_photo_upload_reaches_success_with_share_url() {
        let (store, recorder) = test_store();
        store.select_files(vec![SelectedFile::new("photo.jpg", 1_000_000, "image/jpeg")]);

        let files = store.files();
        assert_eq!(files.len(), 1);
        let id = files[0].id;
        assert_eq!(files[0].category.label(), "image");
        assert_eq!(files[0].status, UploadStatus::Pending);
        assert_eq!(store.share_url(id), None);

        store.start_upload();
        assert_eq!(
            store.files()[0].status,
            UploadStatus::Uploading { progress: 0 }
        );

        // ticks land every 300 ms and add 10 each
        tokio::time::sleep(Duration::from_millis(650)).await;
        assert_eq!(store.files()[0].progress(), 20);

        tokio::time::sleep(Duration::from_millis(3000)).await;
        let url = format!("https://example.com/files/{id}/photo.jpg");
        let file = &store.files()[0];
        assert_eq!(file.status, UploadStatus::Success { url: url.clone() });
        assert_eq!(file.progress(), 100);
        assert_eq!(store.share_url(id), Some(url));

        let messages = recorder.messages();
        assert!(messages.contains(&"uploading 1 file".to_string()));
        assert!(messages.contains(&"photo.jpg uploaded".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_unsupported_file_goes_straight_to_error() {
        let (store, recorder) = test_store();
        store.select_files(vec![SelectedFile::new(
            "malware.exe",
            10,
            "application/x-msdownload",
        )]);

        let files = store.files();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].category.label(), "other");
        assert_eq!(
            files[0].status,
            UploadStatus::Error {
                message: "unsupported file type".to_string()
            }
        );

        // nothing is pending, so this must not start anything
        store.start_upload();
        tokio::time::sleep(Duration::from_secs(5)).await;

        assert_eq!(
            store.files()[0].status,
            UploadStatus::Error {
                message: "unsupported file type".to_string()
            }
        );
        let messages = recorder.messages();
        assert!(messages.contains(&"malware.exe: unsupported file type".to_string()));
        assert!(!messages.iter().any(|m| m.starts_with("uploading")));
        assert!(!messages.iter().any(|m| m.ends_with("uploaded")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_oversized_file_is_listed_with_the_limit() {
        let (store, _recorder) = test_store();
        store.select_files(vec![SelectedFile::new(
            "huge.png",
            6 * 1024 * 1024,
            "image/png",
        )]);

        let files = store.files();
        assert_eq!(files[0].category.label(), "image");
        assert_eq!(
            files[0].error_message(),
            Some("file size exceeds the limit (5MB)")
        );

        store.start_upload();
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(store.files()[0].progress(), 0);
    }

    #[tokio::test]
    async fn test_batches_are_truncated_to_the_free_slots() {
        let (store, recorder) = test_store();
        store.select_files(
            (0..3)
                .map(|i| SelectedFile::new(format!("a-{i}.jpg"), 1_000, "image/jpeg"))
                .collect(),
        );
        store.select_files(
            (0..4)
                .map(|i| SelectedFile::new(format!("b-{i}.jpg"), 1_000, "image/jpeg"))
                .collect(),
        );

        let names: Vec<_> = store.files().iter().map(|f| f.name.clone()).collect();
        assert_eq!(
            names,
            vec!["a-0.jpg", "a-1.jpg", "a-2.jpg", "b-0.jpg", "b-1.jpg"]
        );
        assert!(recorder
            .messages()
            .contains(&"limit reached, only the first 2 files were selected".to_string()));
    }

    #[tokio::test]
    async fn test_a_full_list_admits_nothing() {
        let (store, recorder) = test_store();
        store.select_files(
            (0..5)
                .map(|i| SelectedFile::new(format!("a-{i}.jpg"), 1_000, "image/jpeg"))
                .collect(),
        );
        store.select_files(vec![SelectedFile::new("late.png", 1_000, "image/png")]);

        assert_eq!(store.files().len(), 5);
        assert!(recorder
            .messages()
            .contains(&"you can upload at most 5 files at a time".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slots_free_up_once_uploads_finish() {
        let (store, _recorder) = test_store();
        store.select_files(
            (0..5)
                .map(|i| SelectedFile::new(format!("a-{i}.jpg"), 1_000, "image/jpeg"))
                .collect(),
        );
        store.start_upload();
        tokio::time::sleep(Duration::from_secs(4)).await;
        assert!(store
            .files()
            .iter()
            .all(|f| matches!(f.status, UploadStatus::Success { .. })));

        store.select_files(vec![SelectedFile::new("later.png", 1_000, "image/png")]);
        assert_eq!(store.files().len(), 6);
        assert_eq!(store.files()[5].status, UploadStatus::Pending);
    }

    #[tokio::test(start_paused = true)]
    async fn test_bulk_start_flips_every_pending_file() {
        let (store, recorder) = test_store();
        store.select_files(vec![
            SelectedFile::new("one.jpg", 1_000, "image/jpeg"),
            SelectedFile::new("two.pdf", 1_000, "application/pdf"),
        ]);
        store.start_upload();

        for file in store.files() {
            assert_eq!(file.status, UploadStatus::Uploading { progress: 0 });
        }
        assert!(recorder.messages().contains(&"uploading 2 files".to_string()));

        tokio::time::sleep(Duration::from_secs(4)).await;
        let files = store.files();
        assert!(files.iter().all(|f| f.progress() == 100));
        let messages = recorder.messages();
        assert!(messages.contains(&"one.jpg uploaded".to_string()));
        assert!(messages.contains(&"two.pdf uploaded".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_delete_cancels_a_running_upload() {
        let (store, recorder) = test_store();
        store.select_files(vec![SelectedFile::new("photo.jpg", 1_000_000, "image/jpeg")]);
        let id = store.files()[0].id;

        store.start_upload();
        tokio::time::sleep(Duration::from_millis(650)).await;
        assert_eq!(store.files()[0].progress(), 20);

        assert!(store.delete_file(id));
        assert!(store.files().is_empty());

        // plenty of virtual time for a leaked timer to have fired
        tokio::time::sleep(Duration::from_secs(30)).await;
        assert!(store.files().is_empty());
        let messages = recorder.messages();
        assert!(messages.contains(&"removed photo.jpg".to_string()));
        assert!(!messages.contains(&"photo.jpg uploaded".to_string()));
    }

    #[tokio::test]
    async fn test_deleting_an_unknown_id_is_a_no_op() {
        let (store, _recorder) = test_store();
        store.select_files(vec![
            SelectedFile::new("keep.jpg", 1_000, "image/jpeg"),
            SelectedFile::new("drop.jpg", 1_000, "image/jpeg"),
        ]);
        let dropped = store.files()[1].id;

        assert!(store.delete_file(dropped));
        assert!(!store.delete_file(dropped));

        let files = store.files();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "keep.jpg");
    }

    #[tokio::test(start_paused = true)]
    async fn test_notification_kinds_match_their_actions() {
        let (store, recorder) = test_store();
        store.select_files(vec![
            SelectedFile::new("photo.jpg", 1_000_000, "image/jpeg"),
            SelectedFile::new("malware.exe", 10, "application/x-msdownload"),
        ]);
        store.start_upload();
        tokio::time::sleep(Duration::from_secs(4)).await;

        let sent = recorder.snapshot();
        let kind_of = |message: &str| {
            sent.iter()
                .find(|n| n.message == message)
                .map(|n| n.kind)
                .unwrap()
        };
        assert_eq!(
            kind_of("malware.exe: unsupported file type"),
            NotificationKind::Error
        );
        assert_eq!(kind_of("uploading 1 file"), NotificationKind::Info);
        assert_eq!(kind_of("photo.jpg uploaded"), NotificationKind::Success);

        let starts = sent
            .iter()
            .filter(|n| n.message.starts_with("uploading"))
            .count();
        assert_eq!(starts, 1);
    }
}

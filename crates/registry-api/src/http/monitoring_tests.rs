
    use super::*;
    use registry_store::{CourseInput, ParticipantInput, RegistryStore};

    fn populated_state() -> Arc<AppState> {
        let mut store = RegistryStore::new();
        store.create_course(CourseInput::new(1, "Algo", "Ada")).unwrap();
        store.create_course(CourseInput::new(2, "Nets", "Vint")).unwrap();
        store.create_participant(ParticipantInput::new(10, "Bob", 1)).unwrap();
        Arc::new(AppState::new(store))
    }

    #[test]
    fn test_health_status_serialize() {
        assert_eq!(
            serde_json::to_string(&HealthStatus::Healthy).unwrap(),
            "\"healthy\""
        );
        assert!(serde_json::from_str::<HealthStatus>("\"degraded\"").is_err());
    }

    #[tokio::test]
    async fn test_health_check_counts() {
        let response = health_check(State(populated_state())).await;
        assert_eq!(response.0.status, HealthStatus::Healthy);
        assert_eq!(response.0.courses, 2);
        assert_eq!(response.0.participants, 1);
        assert_eq!(response.0.version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_prometheus_metrics_content() {
        let state = populated_state();
        state.increment_requests();
        let metrics = prometheus_metrics(State(state)).await;
        assert!(metrics.content.contains("registry_up 1"));
        assert!(metrics.content.contains("registry_courses 2"));
        assert!(metrics.content.contains("registry_participants 1"));
        assert!(metrics.content.contains("registry_http_requests_total 1"));
    }

    #[tokio::test]
    async fn test_liveness_probe() {
        let response = liveness_probe().await;
        assert_eq!(response.0["status"], "alive");
    }

    #[tokio::test]
    async fn test_readiness_probe() {
        let response = readiness_probe(State(Arc::new(AppState::default()))).await;
        assert_eq!(response.0["status"], "ready");
    }

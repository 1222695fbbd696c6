use super::*;
use std::time::Duration;

#[tokio::test]
async fn test_bounded_passes_result_through() {
    let result = bounded(Duration::from_secs(1), async { Ok::<_, RuntimeError>(7) }).await;
    assert_eq!(result.unwrap(), 7);
}

#[tokio::test]
async fn test_bounded_passes_error_through() {
    let result = bounded(Duration::from_secs(1), async {
        Err::<(), _>(RuntimeError::Spawn("boom".to_string()))
    })
    .await;
    assert!(matches!(result, Err(RuntimeError::Spawn(_))));
}

#[tokio::test]
async fn test_bounded_times_out() {
    let limit = Duration::from_millis(20);
    let result = bounded(limit, async {
        tokio::time::sleep(Duration::from_secs(5)).await;
        Ok::<_, RuntimeError>(())
    })
    .await;
    assert!(matches!(result, Err(RuntimeError::Timeout(d)) if d == limit));
}

#[test]
fn test_error_messages() {
    let err = RuntimeError::NotFound("docker".to_string());
    assert_eq!(err.to_string(), "runtime binary 'docker' not found");

    let err = RuntimeError::Failed {
        status: Some(1),
        stderr: "denied".to_string(),
    };
    assert_eq!(err.to_string(), "runtime exited with status Some(1): denied");
}

// Integration tests for the calendar API
// Requires a running server (and its database) at API_URL.
// Run with: cargo test --test integration_test -- --ignored

use calendar_contracts::Event;
use serde_json::json;

fn base_url() -> String {
    std::env::var("API_URL").unwrap_or_else(|_| "http://localhost:8080".to_string())
}

#[tokio::test]
#[ignore] // Run with: cargo test --test integration_test -- --ignored
async fn test_event_lifecycle() {
    let client = reqwest::Client::new();
    let base = base_url();

    // Step 1: Create an event
    let create_response = client
        .post(format!("{base}/events"))
        .json(&json!({
            "created_by": "ft_test_user",
            "title": "Functional Test Event",
            "description": "Test Description",
            "event_time": "2026-09-01T10:00:00Z",
            "remind_at": "2026-09-01T09:00:00Z"
        }))
        .send()
        .await
        .expect("Failed to create event");

    assert_eq!(
        create_response.status(),
        201,
        "Expected 201 Created, got {}",
        create_response.status()
    );

    let created: Event = create_response
        .json()
        .await
        .expect("Failed to parse created event");
    assert!(created.id > 0, "Expected event ID to be set");
    assert_eq!(created.created_by, "ft_test_user");

    // Step 2: Get the event back
    let get_response = client
        .get(format!("{base}/events/{}", created.id))
        .send()
        .await
        .expect("Failed to get event");

    assert_eq!(get_response.status(), 200);
    let fetched: Event = get_response.json().await.expect("Failed to parse event");
    assert_eq!(fetched.title, "Functional Test Event");

    // Step 3: The listing contains it
    let list_response = client
        .get(format!("{base}/events"))
        .send()
        .await
        .expect("Failed to list events");

    assert_eq!(list_response.status(), 200);
    let events: Vec<Event> = list_response.json().await.expect("Failed to parse events");
    assert!(events.iter().any(|e| e.id == created.id));

    // Step 4: Update it
    let update_response = client
        .put(format!("{base}/events/{}", created.id))
        .json(&json!({
            "title": "Updated Functional Test Event",
            "description": "Test Description",
            "event_time": "2026-09-01T10:00:00Z",
            "remind_at": "2026-09-01T09:00:00Z"
        }))
        .send()
        .await
        .expect("Failed to update event");

    assert_eq!(update_response.status(), 200);
    let updated: Event = update_response.json().await.expect("Failed to parse event");
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Updated Functional Test Event");
    assert_eq!(updated.created_at, created.created_at);

    // Step 5: Delete it
    let delete_response = client
        .delete(format!("{base}/events/{}", created.id))
        .send()
        .await
        .expect("Failed to delete event");

    assert_eq!(delete_response.status(), 204);

    // Step 6: It is gone
    let gone_response = client
        .get(format!("{base}/events/{}", created.id))
        .send()
        .await
        .expect("Failed to check deleted event");

    assert_eq!(
        gone_response.status(),
        404,
        "Expected 404 for deleted event, got {}",
        gone_response.status()
    );
}

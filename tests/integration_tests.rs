// Integration tests for Skill Swap

use actix_web::{test, web, App};
use chrono::{Duration, Utc};
use serde_json::{json, Value};
use skill_swap::core::{filter_and_sort, SkillMatcher, MIN_MATCH_SCORE};
use skill_swap::models::{
    find_category, Difficulty, MeetingType, Skill, SkillFormat, User, UserPreferences,
};
use skill_swap::routes::{configure_routes, AppState};
use skill_swap::services::MarketplaceStore;
use std::sync::Arc;

const CATEGORIES: &[&str] = &["programming", "design", "music", "languages", "academic"];
const TAGS: &[&str] = &["React", "Python", "Guitar", "Spanish", "Calculus", "Figma", "AI"];

fn create_user(id: &str, credits: u32, interests: &[&str], meeting_type: MeetingType) -> User {
    User {
        id: id.to_string(),
        email: format!("{}@university.edu", id),
        name: format!("User {}", id),
        credits,
        avatar: None,
        bio: None,
        major: None,
        year: None,
        skills: vec![],
        interests: interests.iter().map(|s| s.to_string()).collect(),
        rating: 4.0,
        total_swaps: 3,
        joined_at: Utc::now(),
        last_active: Utc::now(),
        preferences: UserPreferences {
            preferred_meeting_type: meeting_type,
            ..UserPreferences::default()
        },
    }
}

/// Deterministic, varied catalog owned by a handful of users
fn create_catalog(count: usize) -> Vec<Skill> {
    let now = Utc::now();
    let difficulties = [Difficulty::Beginner, Difficulty::Intermediate, Difficulty::Advanced];
    let formats = [SkillFormat::OneOnOne, SkillFormat::Group, SkillFormat::Workshop];

    (0..count)
        .map(|i| Skill {
            id: format!("skill-{}", i),
            title: format!("{} session {}", TAGS[i % TAGS.len()], i),
            description: "Peer tutoring".to_string(),
            credits: (i % 12) as u32 + 1,
            user_id: format!("owner-{}", i % 4),
            user_email: format!("owner-{}@university.edu", i % 4),
            category: find_category(CATEGORIES[i % CATEGORIES.len()]).unwrap(),
            difficulty: difficulties[i % 3],
            duration: "1 hour".to_string(),
            format: formats[(i / 3) % 3],
            tags: vec![TAGS[i % TAGS.len()].to_string(), TAGS[(i * 3) % TAGS.len()].to_string()],
            requirements: vec![],
            created_at: now - Duration::days(60),
            updated_at: now - Duration::days((i % 40) as i64),
            is_active: i % 9 != 0,
            views: (i * 7 % 50) as u32,
            swaps: (i * 5 % 20) as u32,
            rating: 2.5 + (i % 6) as f64 * 0.5,
            reviews: vec![],
        })
        .collect()
}

#[::std::prelude::v1::test]
fn test_integration_matching_properties() {
    let matcher = SkillMatcher::with_default_weights();
    let catalog = create_catalog(120);
    let users = vec![
        create_user("owner-1", 6, &["react", "guitar"], MeetingType::Online),
        create_user("someone", 3, &["ai"], MeetingType::InPerson),
        create_user("rich", 50, &["python", "calculus", "figma"], MeetingType::Both),
    ];

    for user in &users {
        let matches = matcher.find_matches(user, &catalog);

        for m in &matches {
            assert_ne!(m.skill.user_id, user.id, "own skill recommended");
            assert!(m.skill.credits <= user.credits, "unaffordable skill recommended");
            assert!(m.skill.is_active, "inactive skill recommended");
            assert!(m.match_score > MIN_MATCH_SCORE && m.match_score <= 1.0);
            assert!(m.reasons.len() <= 3);
        }

        for pair in matches.windows(2) {
            assert!(pair[0].match_score >= pair[1].match_score, "matches not sorted by score");
        }
    }
}

#[::std::prelude::v1::test]
fn test_integration_matching_is_idempotent() {
    let matcher = SkillMatcher::with_default_weights();
    let catalog = create_catalog(60);
    let user = create_user("someone", 12, &["spanish", "react"], MeetingType::Online);
    let now = Utc::now();

    let first = matcher.find_matches_at(&user, &catalog, now);
    let second = matcher.find_matches_at(&user, &catalog, now);

    assert_eq!(first, second);
}

#[::std::prelude::v1::test]
fn test_integration_reason_priority() {
    let matcher = SkillMatcher::with_default_weights();
    let catalog = create_catalog(60);
    let user = create_user("someone", 12, &["python"], MeetingType::Both);

    let priority = [
        "Matches your interests",
        "Highly rated by other students",
        "Popular skill with many successful swaps",
        "Personalized one-on-one learning",
        "Perfect for beginners",
    ];

    for m in matcher.find_matches(&user, &catalog) {
        let positions: Vec<usize> = m
            .reasons
            .iter()
            .map(|r| priority.iter().position(|p| r.starts_with(p)).unwrap())
            .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]), "reasons out of order: {:?}", m.reasons);
    }
}

#[::std::prelude::v1::test]
fn test_integration_browse_without_filters_keeps_everything() {
    let catalog = create_catalog(40);
    let ranked = filter_and_sort(&catalog, "", "all", "all");

    assert_eq!(ranked.len(), catalog.len());

    let score = |s: &Skill| s.rating * 0.6 + (s.swaps as f64 / 10.0) * 0.4;
    for pair in ranked.windows(2) {
        assert!(score(&pair[0]) >= score(&pair[1]));
    }
}

fn test_state(store: MarketplaceStore) -> AppState {
    AppState {
        store: Arc::new(store),
        matcher: SkillMatcher::default(),
        recommendation_limit: 6,
        max_recommendation_limit: 50,
        swap_latency: std::time::Duration::ZERO,
        recommendation_latency: std::time::Duration::ZERO,
    }
}

#[actix_web::test]
async fn test_integration_http_swap_flow() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_state(MarketplaceStore::default())))
            .configure(configure_routes),
    )
    .await;

    // Wrong domain is refused
    let req = test::TestRequest::post()
        .uri("/api/v1/users/login")
        .set_json(json!({ "email": "tutor@gmail.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let req = test::TestRequest::post()
        .uri("/api/v1/users/login")
        .set_json(json!({ "email": "maria.lopez@university.edu" }))
        .to_request();
    let tutor: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(tutor["name"], "Maria Lopez");

    let req = test::TestRequest::post()
        .uri("/api/v1/users/login")
        .set_json(json!({ "email": "learner@university.edu" }))
        .to_request();
    let learner: Value = test::call_and_read_body_json(&app, req).await;
    let learner_id = learner["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/users/{}", learner_id))
        .set_json(json!({ "interests": ["spanish"] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let req = test::TestRequest::post()
        .uri("/api/v1/skills")
        .set_json(json!({
            "userId": tutor["id"],
            "title": "Conversational Spanish",
            "description": "Weekly practice",
            "credits": 4,
            "categoryId": "languages",
            "difficulty": "beginner",
            "duration": "1 hour",
            "format": "group",
            "tags": ["Spanish", "Speaking"]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 201);
    let skill: Value = test::read_body_json(resp).await;
    let skill_id = skill["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri("/api/v1/skills?search=spanish&category=languages")
        .to_request();
    let browse: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(browse["total_results"], 1);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/recommendations?userId={}", learner_id))
        .to_request();
    let recs: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(recs["matches"][0]["skill"]["id"], skill_id.as_str());
    assert_eq!(recs["matches"][0]["reasons"][0], "Matches your interests: spanish");

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/skills/{}/swap", skill_id))
        .set_json(json!({ "userId": learner_id }))
        .to_request();
    let swap: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(swap["user"]["credits"], 6);
    assert_eq!(swap["user"]["totalSwaps"], 1);
    assert_eq!(swap["transaction"]["status"], "completed");

    // Tutor cannot buy their own listing
    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/skills/{}/swap", skill_id))
        .set_json(json!({ "userId": tutor["id"] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/users/{}/analytics", tutor["id"].as_str().unwrap()))
        .to_request();
    let analytics: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(analytics["user"]["creditsEarned"], 4);
    assert_eq!(analytics["user"]["skillsShared"], 1);
    assert_eq!(analytics["platform"]["totalSwaps"], 1);
    assert_eq!(analytics["activityStatus"], "Online now");
}

#[actix_web::test]
async fn test_integration_http_validation() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_state(MarketplaceStore::default())))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/skills")
        .set_json(json!({
            "userId": "someone",
            "title": "Too pricey",
            "description": "x",
            "credits": 25,
            "categoryId": "other",
            "difficulty": "advanced",
            "format": "workshop"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let req = test::TestRequest::get()
        .uri("/api/v1/recommendations?userId=nobody")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let health: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(health["status"], "healthy");
}

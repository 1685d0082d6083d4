use crate::content::{ encode_uri_component, ContactInfo, ContactKind, Portfolio, Skill };

fn contact() -> ContactInfo {
    ContactInfo {
        email: "someone@example.com".to_string(),
        phone: "+91 7876140010".to_string(),
        location: "Kangra, Himachal Pradesh, India".to_string(),
        linkedin: "https://linkedin.com/in/someone".to_string(),
        linkedin_label: "linkedin.com/in/someone".to_string(),
    }
}

#[test]
fn test_bundled_content_parses() {
    let portfolio = Portfolio::from_json(include_str!("../../assets/content.json")).unwrap();
    assert!(!portfolio.hero.name.is_empty());
    assert_eq!(portfolio.projects.len(), 6);
    assert_eq!(portfolio.skill_categories.len(), 4);
    assert_eq!(Portfolio::bundled(), &portfolio);
}

#[test]
fn test_bundled_project_ids_are_unique() {
    let projects = &Portfolio::bundled().projects;
    let mut ids: Vec<_> = projects.iter().map(|p| p.id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), projects.len());
}

#[test]
fn test_optional_project_links_default_to_none() {
    let json = r#"{"id": "x", "title": "T", "description": "D", "image": "/x.png"}"#;
    let project: crate::content::Project = serde_json::from_str(json).unwrap();
    assert!(project.github_url.is_none());
    assert!(project.demo_url.is_none());
    assert!(project.technologies.is_empty());
}

#[test]
fn test_invalid_content_is_an_error() {
    assert!(Portfolio::from_json("{\"hero\": 3}").is_err());
}

#[test]
fn test_skill_highlight_threshold_is_strict() {
    let skill = |level| Skill { name: "Rust".to_string(), level };
    assert!(skill(Some(81)).is_highlighted());
    assert!(!skill(Some(80)).is_highlighted());
    assert!(!skill(None).is_highlighted());
}

#[test]
fn test_contact_hrefs() {
    let info = contact();
    assert_eq!(info.mailto_href(), "mailto:someone@example.com");
    assert_eq!(info.tel_href(), "tel:+91 7876140010");
    assert_eq!(info.map_href(), "https://maps.google.com/?q=Kangra%2C%20Himachal%20Pradesh%2C%20India");
}

#[test]
fn test_encode_uri_component_matches_javascript() {
    assert_eq!(encode_uri_component("a-b_c.d!e~f*g'h(i)j"), "a-b_c.d!e~f*g'h(i)j");
    assert_eq!(encode_uri_component("a&b=c/d?e#f"), "a%26b%3Dc%2Fd%3Fe%23f");
    assert_eq!(encode_uri_component("São Paulo"), "S%C3%A3o%20Paulo");
    assert_eq!(encode_uri_component(""), "");
}

#[test]
fn test_contact_items_order_and_targets() {
    let items = contact().items();
    let kinds: Vec<_> = items.iter().map(|item| item.kind).collect();
    assert_eq!(
        kinds,
        vec![ContactKind::Email, ContactKind::Phone, ContactKind::Location, ContactKind::LinkedIn]
    );

    for item in &items[..3] {
        assert_eq!(item.target(), "_self");
        assert_eq!(item.rel(), None);
    }
    let linkedin = &items[3];
    assert_eq!(linkedin.target(), "_blank");
    assert_eq!(linkedin.rel(), Some("noopener noreferrer"));
    assert_eq!(linkedin.value, "linkedin.com/in/someone");
    assert_eq!(linkedin.href, "https://linkedin.com/in/someone");
}

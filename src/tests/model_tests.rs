use crate::models::{AutolinkType, AutolinkedItem, IssueOrPullRequestType};

#[test]
fn test_resolved_item_deserializes_from_full_attribute_set() {
    let json = r#"{
        "id": "10",
        "title": "Fix bug",
        "url": "https://x/10",
        "type": "pullrequest",
        "closed": true,
        "date": "2020-01-01T00:00:00Z",
        "closedDate": "2021-06-01T00:00:00Z",
        "provider": { "name": "GitHub" }
    }"#;

    let item: AutolinkedItem = serde_json::from_str(json).unwrap();
    match item {
        AutolinkedItem::Resolved(item) => {
            assert_eq!(item.item_type, IssueOrPullRequestType::PullRequest);
            assert!(item.closed);
            assert_eq!(item.relevant_date(), "2021-06-01T00:00:00Z");
            assert_eq!(item.provider.name, "GitHub");
        }
        AutolinkedItem::Autolink(_) => panic!("expected resolved variant"),
    }
}

#[test]
fn test_autolink_deserializes_with_optional_fields_absent() {
    let json = r#"{ "id": "JIRA-123", "prefix": "", "url": "https://j/JIRA-123" }"#;

    let item: AutolinkedItem = serde_json::from_str(json).unwrap();
    match item {
        AutolinkedItem::Autolink(link) => {
            assert_eq!(link.id, "JIRA-123");
            assert!(link.title.is_none());
            assert!(link.link_type.is_none());
            assert!(link.provider.is_none());
        }
        AutolinkedItem::Resolved(_) => panic!("expected autolink variant"),
    }
}

#[test]
fn test_autolink_with_stray_boolean_is_not_misclassified() {
    // A bare "closed" flag is not enough to look resolved; the resolved
    // variant needs title, date, and provider too.
    let json = r##"{ "id": "7", "prefix": "#", "url": "https://x/7", "closed": true }"##;

    let item: AutolinkedItem = serde_json::from_str(json).unwrap();
    assert!(matches!(item, AutolinkedItem::Autolink(_)));
}

#[test]
fn test_autolink_type_wire_names() {
    let link: AutolinkType = serde_json::from_str(r#""pullrequest""#).unwrap();
    assert_eq!(link, AutolinkType::PullRequest);
    let link: AutolinkType = serde_json::from_str(r#""issue""#).unwrap();
    assert_eq!(link, AutolinkType::Issue);
}

#[test]
fn test_relevant_date_falls_back_to_open_date() {
    let item = super::pull_request("1", "t", false);
    assert_eq!(item.relevant_date(), "2020-01-01T00:00:00Z");
}

#[test]
fn test_item_accessors() {
    let item = AutolinkedItem::Autolink(super::autolink("42", None));
    assert_eq!(item.id(), "42");
    assert_eq!(item.url(), "https://x/42");
}

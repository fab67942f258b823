use crate::model::{ServiceDescriptor, ServiceId};
use crate::table::{builtin_services, match_hostname};

#[test]
fn matches_root_domain_and_subdomains() {
    let youtube = &builtin_services()[0];
    assert!(youtube.matches_host("youtube.com"));
    assert!(youtube.matches_host("www.youtube.com"));
    assert!(youtube.matches_host("music.youtube.com"));
    assert!(!youtube.matches_host("notyoutube.com"));
    assert!(!youtube.matches_host("youtube.com.evil.example"));
}

#[test]
fn matches_any_registered_suffix() {
    // YouTube registers two root domains; both classify to it.
    assert_eq!(match_hostname("youtu.be").map(|s| s.as_str()), Some("YouTube"));
    assert_eq!(
        match_hostname("www.youtube.com").map(|s| s.as_str()),
        Some("YouTube")
    );
}

#[test]
fn matching_is_case_insensitive_and_fqdn_tolerant() {
    assert_eq!(
        match_hostname("WWW.Reddit.COM").map(|s| s.as_str()),
        Some("Reddit")
    );
    assert_eq!(
        match_hostname("old.reddit.com.").map(|s| s.as_str()),
        Some("Reddit")
    );
}

#[test]
fn unknown_hosts_do_not_classify() {
    assert_eq!(match_hostname("example.com"), None);
    assert_eq!(match_hostname(""), None);
    assert_eq!(match_hostname("."), None);
}

#[test]
fn first_descriptor_wins_on_overlap() {
    let overlapping = [
        ServiceDescriptor::new(ServiceId::new("First"), &["shared.example"]),
        ServiceDescriptor::new(ServiceId::new("Second"), &["shared.example"]),
    ];
    let winner = overlapping
        .iter()
        .find(|s| s.matches_host("shared.example"))
        .map(|s| s.id());
    assert_eq!(winner.map(|s| s.as_str()), Some("First"));
}

#[test]
fn config_key_is_lowercased_identifier() {
    assert_eq!(ServiceId::new("YouTube").config_key(), "youtube");
    assert_eq!(ServiceId::new("Imgur").config_key(), "imgur");
}

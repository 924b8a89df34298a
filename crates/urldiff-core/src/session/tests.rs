//! Tests for the comparison session.

use super::{DiffSession, SessionError, DEFAULT_INITIAL_URL};

#[test]
fn default_starts_on_initial_url() {
    let s = DiffSession::default();
    assert_eq!(s.current_url(), DEFAULT_INITIAL_URL);
    assert_eq!(s.candidate_url(), "");
    assert!(!s.is_showing_diff());
    assert!(s.rows().is_empty());
}

#[test]
fn empty_candidate_rejected_without_state_change() {
    let mut s = DiffSession::new("https://a.com/");
    s.set_candidate("   ");
    assert_eq!(s.submit(), Err(SessionError::EmptyCandidate));
    assert!(!s.is_showing_diff());
    assert_eq!(s.current_url(), "https://a.com/");
}

#[test]
fn identical_candidate_hides_diff() {
    let mut s = DiffSession::new("https://a.com/");
    s.set_candidate("https://a.com/?x=1");
    s.submit().unwrap();
    assert!(s.is_showing_diff());

    s.set_candidate("https://a.com/");
    assert_eq!(s.submit(), Err(SessionError::IdenticalToCurrent));
    assert!(!s.is_showing_diff());
}

#[test]
fn submit_returns_rows() {
    let mut s = DiffSession::new("https://a.com/p?x=1");
    s.set_candidate("https://a.com/p?x=2");
    let rows = s.submit().unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[3].name, "Query Param: x");
    assert!(!rows[3].is_same);
    assert_eq!(s.rows(), rows);
}

#[test]
fn submit_unparsable_candidate_shows_nothing() {
    let mut s = DiffSession::new("https://a.com/");
    s.set_candidate("bad");
    let rows = s.submit().unwrap();
    assert!(rows.is_empty());
    assert!(s.is_showing_diff());
}

#[test]
fn apply_promotes_candidate() {
    let mut s = DiffSession::new("https://a.com/");
    s.set_candidate("https://b.com/");
    s.submit().unwrap();
    assert_eq!(s.apply(), Ok("https://b.com/"));
    assert_eq!(s.current_url(), "https://b.com/");
    assert_eq!(s.candidate_url(), "");
    assert!(!s.is_showing_diff());
}

#[test]
fn apply_without_diff_rejected() {
    let mut s = DiffSession::new("https://a.com/");
    s.set_candidate("https://b.com/");
    assert_eq!(s.apply(), Err(SessionError::NothingToApply));
    assert_eq!(s.current_url(), "https://a.com/");
}

#[test]
fn cancel_clears_candidate() {
    let mut s = DiffSession::new("https://a.com/");
    s.set_candidate("https://b.com/");
    s.submit().unwrap();
    s.cancel();
    assert_eq!(s.candidate_url(), "");
    assert!(!s.is_showing_diff());
    assert_eq!(s.current_url(), "https://a.com/");
}

#[test]
fn session_error_messages() {
    assert_eq!(SessionError::EmptyCandidate.to_string(), "Please enter a new URL.");
    assert_eq!(
        SessionError::IdenticalToCurrent.to_string(),
        "The new URL is the same as the current URL. No changes to display."
    );
}

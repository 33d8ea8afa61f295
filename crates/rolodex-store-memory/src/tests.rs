//! Tests for `MemoryStore`.

use rolodex_core::{
  contact::{Contact, ContactPatch, NewContact},
  store::ContactStore,
};

use crate::{Error, MemoryStore};

fn new_contact(name: &str, category: Option<&str>) -> NewContact {
  NewContact::new(
    Some(name.into()),
    Some("555-0100".into()),
    Some(format!("{}@example.com", name.to_lowercase())),
    category.map(Into::into),
  )
  .expect("valid contact")
}

fn contact(id: u64, category: &str) -> Contact {
  Contact {
    id,
    name: format!("Contact {id}"),
    phone: "555-0100".into(),
    email: format!("c{id}@example.com"),
    category: category.into(),
  }
}

// ─── Construction ────────────────────────────────────────────────────────────

#[tokio::test]
async fn empty_store_starts_ids_at_one() {
  let s = MemoryStore::new();
  assert!(s.list_contacts().await.unwrap().is_empty());

  let c = s.create_contact(new_contact("Alice", None)).await.unwrap();
  assert_eq!(c.id, 1);
}

#[tokio::test]
async fn sample_store_has_three_contacts_and_next_id_four() {
  let s = MemoryStore::with_sample_contacts().unwrap();
  let all = s.list_contacts().await.unwrap();
  assert_eq!(all.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2, 3]);
  assert_eq!(all[0].name, "John Doe");

  let c = s.create_contact(new_contact("A", None)).await.unwrap();
  assert_eq!(c.id, 4);
}

#[tokio::test]
async fn sample_counter_starts_above_every_sample_id() {
  let max = crate::sample::sample_contacts()
    .iter()
    .map(|c| c.id)
    .max()
    .unwrap();
  let s = MemoryStore::with_sample_contacts().unwrap();
  let c = s.create_contact(new_contact("A", None)).await.unwrap();
  assert_eq!(c.id, max + 1);
}

#[tokio::test]
async fn preloaded_ids_seed_the_counter() {
  let s = MemoryStore::with_contacts(vec![contact(7, "Work"), contact(3, "Home")])
    .unwrap();
  let c = s.create_contact(new_contact("A", None)).await.unwrap();
  assert_eq!(c.id, 8);

  // Insertion order is kept, not id order.
  let ids: Vec<_> = s.list_contacts().await.unwrap().iter().map(|c| c.id).collect();
  assert_eq!(ids, vec![7, 3, 8]);
}

#[test]
fn duplicate_preloaded_ids_are_rejected() {
  let err = MemoryStore::with_contacts(vec![contact(2, "A"), contact(2, "B")])
    .err()
    .unwrap();
  assert_eq!(err, Error::DuplicateId(2));
}

#[tokio::test]
async fn counter_overflow_is_an_error() {
  let s = MemoryStore::with_contacts(vec![contact(u64::MAX - 1, "Work")]).unwrap();
  let err = s.create_contact(new_contact("A", None)).await.unwrap_err();
  assert_eq!(err, Error::IdSpaceExhausted);
  assert_eq!(s.list_contacts().await.unwrap().len(), 1);
}

// ─── Create / get ────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_defaults_category_and_appends() {
  let s = MemoryStore::with_sample_contacts().unwrap();
  let c = s.create_contact(new_contact("A", None)).await.unwrap();
  assert_eq!(c.category, "General");

  let all = s.list_contacts().await.unwrap();
  assert_eq!(all.len(), 4);
  assert_eq!(all.last(), Some(&c));
  assert_eq!(s.get_contact(c.id).await.unwrap(), Some(c));
}

#[tokio::test]
async fn get_missing_returns_none() {
  let s = MemoryStore::with_sample_contacts().unwrap();
  assert!(s.get_contact(42).await.unwrap().is_none());
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn update_preserves_absent_fields() {
  let s = MemoryStore::with_sample_contacts().unwrap();
  let before = s.get_contact(2).await.unwrap().unwrap();

  let updated = s
    .update_contact(2, ContactPatch {
      category: Some("Family".into()),
      ..Default::default()
    })
    .await
    .unwrap()
    .unwrap();

  assert_eq!(updated.category, "Family");
  assert_eq!(updated.name, before.name);
  assert_eq!(updated.phone, before.phone);
  assert_eq!(updated.email, before.email);
  assert_eq!(s.get_contact(2).await.unwrap(), Some(updated));
}

#[tokio::test]
async fn update_missing_returns_none() {
  let s = MemoryStore::new();
  let res = s.update_contact(1, ContactPatch::default()).await.unwrap();
  assert!(res.is_none());
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_removes_exactly_one() {
  let s = MemoryStore::with_sample_contacts().unwrap();
  let removed = s.delete_contact(2).await.unwrap().unwrap();
  assert_eq!(removed.name, "Jane Smith");

  assert_eq!(s.list_contacts().await.unwrap().len(), 2);
  assert!(s.get_contact(2).await.unwrap().is_none());
  assert!(s.delete_contact(2).await.unwrap().is_none());
}

#[tokio::test]
async fn deleted_ids_are_never_reused() {
  let s = MemoryStore::with_sample_contacts().unwrap();
  s.delete_contact(3).await.unwrap();
  let c = s.create_contact(new_contact("A", None)).await.unwrap();
  assert_eq!(c.id, 4);
}

// ─── Categories ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn categories_are_distinct_in_first_seen_order() {
  let s = MemoryStore::with_sample_contacts().unwrap();
  s.create_contact(new_contact("A", Some("Work"))).await.unwrap();
  s.create_contact(new_contact("B", None)).await.unwrap();

  assert_eq!(s.list_categories().await.unwrap(), vec![
    "Work".to_string(),
    "Personal".to_string(),
    "General".to_string(),
  ]);
}

#[tokio::test]
async fn categories_follow_deletes() {
  let s = MemoryStore::with_sample_contacts().unwrap();
  s.delete_contact(2).await.unwrap();
  assert_eq!(s.list_categories().await.unwrap(), vec!["Work".to_string()]);
}

#[tokio::test]
async fn clones_share_state() {
  let a = MemoryStore::new();
  let b = a.clone();
  a.create_contact(new_contact("A", None)).await.unwrap();
  assert_eq!(b.list_contacts().await.unwrap().len(), 1);
}

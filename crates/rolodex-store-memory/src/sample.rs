//! Demo records loaded by [`MemoryStore::with_sample_contacts`](crate::MemoryStore::with_sample_contacts).

use rolodex_core::contact::Contact;

pub(crate) fn sample_contacts() -> Vec<Contact> {
  let contact = |id, name: &str, phone: &str, email: &str, category: &str| Contact {
    id,
    name: name.to_string(),
    phone: phone.to_string(),
    email: email.to_string(),
    category: category.to_string(),
  };

  vec![
    contact(1, "John Doe", "+1-234-567-8900", "john.doe@example.com", "Work"),
    contact(2, "Jane Smith", "+1-234-567-8901", "jane.smith@example.com", "Personal"),
    contact(3, "Bob Wilson", "+1-234-567-8902", "bob.wilson@example.com", "Work"),
  ]
}

#![allow(
	clippy::dbg_macro,
	clippy::expect_used,
	clippy::missing_docs_in_private_items,
	clippy::print_stderr,
	clippy::print_stdout,
	clippy::unwrap_used
)]
use std::error::Error;

use ldap_object::{Attribute, EntryValue, Object};
use serial_test::serial;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

mod common;

use common::{
	ldap_add_object, ldap_add_organizational_unit, ldap_connect, ldap_delete_object,
	ldap_delete_organizational_unit, ldap_replace_object, ldap_search_object, BASE_DN,
};

#[must_use]
pub fn user_object(cn: &str) -> Object {
	let mut object = Object::with_dn(format!("cn={cn},ou=users,{BASE_DN}"));
	object
		.set(Attribute::new("objectClass", ["top", "inetOrgPerson"]))
		.set(Attribute::new("cn", cn))
		.set(Attribute::new("sn", "User"))
		.set(Attribute::new("description", ""));
	object
}

#[test]
fn case_variants_share_one_attribute() {
	let mut object = Object::new();
	object.get_or_create("displayName").add("Bob");

	for name in ["displayname", "DISPLAYNAME", "DisplayName"] {
		assert!(object.has(name));
		assert!(std::ptr::eq(object.get(name).unwrap(), object.get("displayName").unwrap()));
	}
	assert_eq!(object.len(), 1);
}

#[test]
fn search_entry_round_trip_shape() {
	let object = user_object("user01");
	let entry = object.entry(false);

	assert_eq!(entry.get("description"), None, "Empty values should be dropped");
	assert_eq!(entry["objectclass"], EntryValue::from(["top", "inetOrgPerson"]));
	assert_eq!(entry["cn"], EntryValue::from("user01"));
	assert_eq!(object.parent_dn().unwrap(), format!("ou=users,{BASE_DN}"));
}

#[ignore = "docker"]
#[tokio::test]
#[serial]
async fn ldap_object_add_test() -> Result<(), Box<dyn Error>> {
	let tracing_filter = EnvFilter::default().add_directive(LevelFilter::DEBUG.into());
	tracing_subscriber::fmt().with_env_filter(tracing_filter).init();

	let mut ldap = ldap_connect().await?;
	let _ = ldap_delete_organizational_unit(&mut ldap, "users").await;
	ldap_add_organizational_unit(&mut ldap, "users").await?;

	let object = user_object("user01");
	ldap_add_object(&mut ldap, &object).await?;

	let dn = object.distinguished_name().unwrap();
	let found = ldap_search_object(&mut ldap, dn).await?;
	assert_eq!(found.get("CN")?.values(), ["user01"]);
	assert_eq!(found.get("sn")?.values(), ["User"]);
	assert!(!found.has("description"), "Empty attributes should not have been written");
	assert_eq!(found.parent_dn()?, object.parent_dn()?);

	ldap_delete_object(&mut ldap, dn).await?;
	ldap_delete_organizational_unit(&mut ldap, "users").await?;
	ldap.unbind().await?;

	Ok(())
}

#[ignore = "docker"]
#[tokio::test]
#[serial]
async fn ldap_object_modify_test() -> Result<(), Box<dyn Error>> {
	let mut ldap = ldap_connect().await?;
	let _ = ldap_delete_organizational_unit(&mut ldap, "users").await;
	ldap_add_organizational_unit(&mut ldap, "users").await?;

	let object = user_object("user02");
	ldap_add_object(&mut ldap, &object).await?;
	let dn = object.distinguished_name().unwrap().to_owned();

	let mut found = ldap_search_object(&mut ldap, &dn).await?;
	found.get_or_create("displayName").add("MyName2");
	found.get_or_create("mail").add("a@example.org").add("b@example.org");
	ldap_replace_object(&mut ldap, &found).await?;

	let modified = ldap_search_object(&mut ldap, &dn).await?;
	assert_eq!(modified.get("displayname")?.values(), ["MyName2"]);
	let mut mail = modified.get("mail")?.values().to_vec();
	mail.sort();
	assert_eq!(mail, ["a@example.org", "b@example.org"]);

	ldap_delete_object(&mut ldap, &dn).await?;
	ldap_delete_organizational_unit(&mut ldap, "users").await?;
	ldap.unbind().await?;

	Ok(())
}

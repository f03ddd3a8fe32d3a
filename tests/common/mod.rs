use std::error::Error;

use ldap3::{LdapConnAsync, SearchEntry};
use ldap_object::Object;

pub const BASE_DN: &str = "dc=example,dc=org";

pub async fn ldap_add_organizational_unit(
	ldap: &mut ldap3::Ldap,
	ou: &str,
) -> Result<(), Box<dyn Error>> {
	ldap.add(&format!("ou={},{BASE_DN}", ou), vec![("objectClass", ["organizationalUnit"].into())])
		.await?
		.success()?;
	Ok(())
}

pub async fn ldap_delete_organizational_unit(
	ldap: &mut ldap3::Ldap,
	ou: &str,
) -> Result<(), Box<dyn Error>> {
	ldap.delete(&format!("ou={},{BASE_DN}", ou)).await?.success()?;
	Ok(())
}

pub async fn ldap_connect() -> Result<ldap3::Ldap, Box<dyn Error>> {
	let (conn, mut ldap) = LdapConnAsync::new("ldap://localhost:1389").await?;
	let _handle = tokio::spawn(async move {
		if let Err(err) = conn.drive().await {
			panic!("Ldap connection error {err}");
		}
	});
	ldap.simple_bind(&format!("cn=admin,{BASE_DN}"), "adminpassword").await?;
	Ok(ldap)
}

pub async fn ldap_add_object(ldap: &mut ldap3::Ldap, object: &Object) -> Result<(), Box<dyn Error>> {
	let dn = object.distinguished_name().ok_or("Object without DN")?;
	ldap.add(dn, object.add_attrs(false)).await?.success()?;
	Ok(())
}

pub async fn ldap_replace_object(
	ldap: &mut ldap3::Ldap,
	object: &Object,
) -> Result<(), Box<dyn Error>> {
	let dn = object.distinguished_name().ok_or("Object without DN")?;
	ldap.modify(dn, object.replace_mods(false)).await?.success()?;
	Ok(())
}

pub async fn ldap_delete_object(ldap: &mut ldap3::Ldap, dn: &str) -> Result<(), Box<dyn Error>> {
	ldap.delete(dn).await?.success()?;
	Ok(())
}

pub async fn ldap_search_object(ldap: &mut ldap3::Ldap, dn: &str) -> Result<Object, Box<dyn Error>> {
	let (result, _res) =
		ldap.search(dn, ldap3::Scope::Base, "(objectClass=*)", vec!["*"]).await?.success()?;
	let entry = result.first().ok_or("No entry found")?.clone();
	Ok(Object::from(SearchEntry::construct(entry)))
}

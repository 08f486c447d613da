//! Extras operations for MockNetBoxClient

use super::helpers::assign;
use super::{MockNetBoxClient, delete_from, get_from, lock, update_in};
use crate::error::NetBoxError;
use crate::models::*;

fn apply_tag(tag: &mut Tag, w: &WritableTag) {
    assign(&mut tag.name, &w.name);
    assign(&mut tag.slug, &w.slug);
    assign(&mut tag.color, &w.color);
    assign(&mut tag.description, &w.description);
    tag.display = tag.name.clone();
}

pub async fn get_tag(client: &MockNetBoxClient, id: u64) -> Result<Tag, NetBoxError> {
    client.check_failure()?;
    get_from(&client.tags, id, "Tag")
}

pub async fn create_tag(client: &MockNetBoxClient, request: &WritableTag) -> Result<Tag, NetBoxError> {
    client.check_failure()?;
    client.record("POST", "/extras/tags/".to_string(), request)?;

    let id = client.next_id();
    let mut tag = Tag {
        id,
        url: client.helpers().object_url("extras/tags", id),
        color: "9e9e9e".to_string(),
        ..Default::default()
    };
    apply_tag(&mut tag, request);

    lock(&client.tags).insert(id, tag.clone());
    Ok(tag)
}

pub async fn update_tag(client: &MockNetBoxClient, id: u64, request: &WritableTag) -> Result<Tag, NetBoxError> {
    client.check_failure()?;
    client.record("PATCH", format!("/extras/tags/{}/", id), request)?;
    update_in(&client.tags, id, "Tag", |tag| apply_tag(tag, request))
}

pub async fn delete_tag(client: &MockNetBoxClient, id: u64) -> Result<(), NetBoxError> {
    client.check_failure()?;
    delete_from(&client.tags, id, "Tag")
}

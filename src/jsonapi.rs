// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Minimal JSON:API document handling.
//!
//! Covers what the API needs: single-resource documents with attributes,
//! relationships and links on the way out, and single-resource payloads on
//! the way in. Links are built from the configured domain, which is passed
//! in explicitly through [`LinkBuilder`].

use crate::error::{AppError, Result};
use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::collections::BTreeMap;

/// The JSON:API media type.
pub const MEDIA_TYPE: &str = "application/vnd.api+json";

/// Link name to URL.
pub type Links = BTreeMap<String, String>;

/// `{"type": ..., "id": ...}` pair identifying a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceIdentifier {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
}

impl ResourceIdentifier {
    pub fn new(kind: &str, id: i64) -> Self {
        Self {
            kind: kind.to_string(),
            id: id.to_string(),
        }
    }
}

/// Linkage of a relationship: to-one or to-many.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RelationshipData {
    One(ResourceIdentifier),
    Many(Vec<ResourceIdentifier>),
}

/// A relationship object.
#[derive(Debug, Clone, Serialize)]
pub struct Relationship {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<RelationshipData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

/// A resource object as it appears under `data`.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceObject {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    pub attributes: serde_json::Value,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub relationships: BTreeMap<String, Relationship>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

/// Top-level document carrying a single resource.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    pub data: ResourceObject,
}

/// Builds absolute resource URLs from the configured domain.
#[derive(Debug, Clone, Copy)]
pub struct LinkBuilder<'a> {
    domain: &'a str,
}

impl<'a> LinkBuilder<'a> {
    pub fn new(domain: &'a str) -> Self {
        Self { domain }
    }

    /// `<domain>/api/<kind>/<id>`
    pub fn resource(&self, kind: &str, id: i64) -> String {
        format!("{}/api/{}/{}", self.domain.trim_end_matches('/'), kind, id)
    }
}

/// Types that can be rendered as a JSON:API resource object.
pub trait Resource {
    /// JSON:API `type` member, also used as the URL path segment.
    const TYPE: &'static str;

    fn id(&self) -> i64;

    fn attributes(&self) -> serde_json::Result<serde_json::Value>;

    fn relationships(&self, _links: LinkBuilder<'_>) -> BTreeMap<String, Relationship> {
        BTreeMap::new()
    }

    fn to_resource_object(&self, links: LinkBuilder<'_>) -> serde_json::Result<ResourceObject> {
        let self_link = Links::from([(
            "self".to_string(),
            links.resource(Self::TYPE, self.id()),
        )]);

        Ok(ResourceObject {
            kind: Self::TYPE.to_string(),
            id: self.id().to_string(),
            attributes: self.attributes()?,
            relationships: self.relationships(links),
            links: Some(self_link),
        })
    }
}

/// A JSON:API response with an explicit status code.
#[derive(Debug)]
pub struct JsonApi {
    status: StatusCode,
    document: Document,
}

impl JsonApi {
    pub fn new<R: Resource>(
        status: StatusCode,
        resource: &R,
        links: LinkBuilder<'_>,
    ) -> Result<Self> {
        Ok(Self {
            status,
            document: Document {
                data: resource.to_resource_object(links)?,
            },
        })
    }

    pub fn ok<R: Resource>(resource: &R, links: LinkBuilder<'_>) -> Result<Self> {
        Self::new(StatusCode::OK, resource, links)
    }

    pub fn created<R: Resource>(resource: &R, links: LinkBuilder<'_>) -> Result<Self> {
        Self::new(StatusCode::CREATED, resource, links)
    }
}

impl IntoResponse for JsonApi {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.document) {
            Ok(bytes) => (
                self.status,
                [(header::CONTENT_TYPE, HeaderValue::from_static(MEDIA_TYPE))],
                bytes,
            )
                .into_response(),
            Err(err) => AppError::Serialization(err).into_response(),
        }
    }
}

// ─── Request payloads ───────────────────────────────────────

#[derive(Deserialize)]
struct RequestDocument<A> {
    data: RequestResource<A>,
}

#[derive(Deserialize)]
struct RequestResource<A> {
    #[serde(rename = "type")]
    kind: String,
    id: Option<String>,
    attributes: Option<A>,
}

/// A parsed single-resource request payload.
#[derive(Debug)]
pub struct Payload<A> {
    pub id: Option<String>,
    pub attributes: A,
}

impl<A> Payload<A> {
    /// Parse the client-supplied `data.id` as a numeric primary key.
    pub fn numeric_id(&self) -> Result<i64> {
        let raw = self.id.as_deref().ok_or_else(|| {
            AppError::BadRequest("resource id MUST be provided".to_string())
        })?;
        raw.parse()
            .map_err(|_| AppError::BadRequest(format!("invalid resource id: {raw}")))
    }
}

/// Parse a JSON:API request body whose resource type must be `expected_type`.
///
/// Missing `attributes` deserialize as `A::default()`.
pub fn parse_payload<A>(body: &[u8], expected_type: &str) -> Result<Payload<A>>
where
    A: DeserializeOwned + Default,
{
    let doc: RequestDocument<A> = serde_json::from_slice(body).map_err(|err| {
        AppError::BadRequest(format!("cannot unmarshal JSON of request: {err}"))
    })?;

    if doc.data.kind != expected_type {
        return Err(AppError::BadRequest(format!(
            "cannot unmarshal JSON of request: resource type \"{}\" does not match \"{}\"",
            doc.data.kind, expected_type
        )));
    }

    Ok(Payload {
        id: doc.data.id,
        attributes: doc.data.attributes.unwrap_or_default(),
    })
}

//! Request builder.
//!
//! Turns a route, a parameter map and an HTTP verb into a [`RequestDescriptor`]:
//! a plain-data description of one HTTP call (URL, headers, body). Building
//! never touches the network and never fails; the descriptor is created fresh
//! for every call and is not reused.

use std::fmt;

use serde_json::{Map, Value};
use url::form_urlencoded;

use crate::config::{Auth, ClientConfig};

const CONTENT_TYPE_JSON: &str = "application/json";
const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";

/// HTTP verb of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Parameter map
// ---------------------------------------------------------------------------

/// Named request parameters.
///
/// Optional arguments go in as `Option<T>`; `None` becomes `null` and is
/// dropped together with every other empty value when the request is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(Map<String, Value>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chainable insert.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_string(), value.into());
    }

    /// Merge `other` into `self`; keys in `other` win.
    pub fn extend(&mut self, other: Params) {
        self.0.extend(other.0);
    }

    /// Merge `other` underneath `self`; keys already in `self` win.
    pub fn with_defaults(mut self, other: Params) -> Self {
        for (key, value) in other.0 {
            self.0.entry(key).or_insert(value);
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Copy without the empty entries.
    pub fn filtered(&self) -> Params {
        Params(
            self.0
                .iter()
                .filter(|(_, v)| !is_empty_value(v))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Value> for Params {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Params(map),
            _ => Params::default(),
        }
    }
}

impl From<Map<String, Value>> for Params {
    fn from(map: Map<String, Value>) -> Self {
        Params(map)
    }
}

impl From<Params> for Value {
    fn from(params: Params) -> Self {
        params.into_value()
    }
}

/// `null`, `""`, `[]` and `{}` are empty. `false` and `0` are real values.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

fn filter_value(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .filter(|(_, v)| !is_empty_value(v))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Flatten one parameter into query pairs. Arrays repeat the bare key.
fn push_pairs(pairs: &mut Vec<(String, String)>, key: &str, value: &Value) {
    match value {
        Value::Null => {}
        Value::String(s) => {
            if !s.is_empty() {
                pairs.push((key.to_string(), s.clone()));
            }
        }
        Value::Bool(b) => pairs.push((key.to_string(), b.to_string())),
        Value::Number(n) => pairs.push((key.to_string(), n.to_string())),
        Value::Array(items) => {
            for item in items {
                push_pairs(pairs, key, item);
            }
        }
        Value::Object(map) => {
            if !map.is_empty() {
                pairs.push((key.to_string(), value.to_string()));
            }
        }
    }
}

fn value_pairs(value: &Value) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    if let Value::Object(map) = value {
        for (key, v) in map {
            push_pairs(&mut pairs, key, v);
        }
    }
    pairs
}

// ---------------------------------------------------------------------------
// Descriptor
// ---------------------------------------------------------------------------

/// A fully-formed HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl RequestDescriptor {
    /// The URL without its query string. Safe to log: `hapikey` lives in the query.
    pub fn route(&self) -> &str {
        self.url.split_once('?').map_or(self.url.as_str(), |(path, _)| path)
    }

    pub fn query(&self) -> Option<&str> {
        self.url.split_once('?').map(|(_, query)| query)
    }

    /// Decoded query pairs, in order.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.query()
            .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
            .unwrap_or_default()
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Parse a JSON body back into a value.
    pub fn json_body(&self) -> Option<Value> {
        self.body.as_deref().and_then(|b| serde_json::from_str(b).ok())
    }
}

// ---------------------------------------------------------------------------
// Endpoint
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Encoding {
    Json,
    Form,
}

/// Everything a façade method decides about one call: verb, route, fixed
/// query pairs and the parameter payload.
#[derive(Debug, Clone)]
pub struct Endpoint {
    method: Method,
    route: String,
    query: Vec<(String, String)>,
    payload: Value,
    encoding: Encoding,
    authenticated: bool,
}

impl Endpoint {
    pub fn new(method: Method, route: impl Into<String>) -> Self {
        Self {
            method,
            route: route.into(),
            query: Vec::new(),
            payload: Value::Null,
            encoding: Encoding::Json,
            authenticated: true,
        }
    }

    pub fn get(route: impl Into<String>) -> Self {
        Self::new(Method::Get, route)
    }

    pub fn post(route: impl Into<String>) -> Self {
        Self::new(Method::Post, route)
    }

    pub fn put(route: impl Into<String>) -> Self {
        Self::new(Method::Put, route)
    }

    pub fn patch(route: impl Into<String>) -> Self {
        Self::new(Method::Patch, route)
    }

    pub fn delete(route: impl Into<String>) -> Self {
        Self::new(Method::Delete, route)
    }

    /// Named parameters: the query string for GET, the body otherwise.
    pub fn params(mut self, params: Params) -> Self {
        self.payload = params.into_value();
        self
    }

    /// Raw JSON payload, for bodies that are not a flat map (batch arrays).
    pub fn json(mut self, payload: Value) -> Self {
        self.payload = payload;
        self
    }

    /// A query pair sent regardless of verb. Arrays repeat the key.
    pub fn query(mut self, key: &str, value: impl Into<Value>) -> Self {
        push_pairs(&mut self.query, key, &value.into());
        self
    }

    /// Send the payload form-encoded instead of as JSON.
    pub fn form(mut self) -> Self {
        self.encoding = Encoding::Form;
        self
    }

    /// Attach no credentials (OAuth token exchange).
    pub fn without_auth(mut self) -> Self {
        self.authenticated = false;
        self
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn route(&self) -> &str {
        &self.route
    }

    pub fn build(&self, config: &ClientConfig) -> RequestDescriptor {
        let mut headers = vec![("Accept".to_string(), CONTENT_TYPE_JSON.to_string())];
        let mut pairs: Vec<(String, String)> = Vec::new();

        if self.authenticated {
            match config.credentials().auth() {
                Auth::Bearer(token) => {
                    headers.push(("Authorization".to_string(), format!("Bearer {token}")));
                }
                Auth::ApiKey(key) => pairs.push(("hapikey".to_string(), key.to_string())),
                Auth::None => {}
            }
        }

        pairs.extend(self.query.iter().cloned());

        let payload = filter_value(&self.payload);
        let mut body = None;
        if self.method == Method::Get {
            pairs.extend(value_pairs(&payload));
        } else if !is_empty_value(&payload) {
            let (content_type, encoded) = match self.encoding {
                Encoding::Json => (CONTENT_TYPE_JSON, payload.to_string()),
                Encoding::Form => (CONTENT_TYPE_FORM, encode_pairs(&value_pairs(&payload))),
            };
            headers.push(("Content-Type".to_string(), content_type.to_string()));
            body = Some(encoded);
        }

        let mut url = format!(
            "{}{}",
            config.base_url().as_str(),
            self.route.trim_start_matches('/')
        );
        if !pairs.is_empty() {
            url.push('?');
            url.push_str(&strip_index_suffixes(&encode_pairs(&pairs)));
        }

        RequestDescriptor {
            method: self.method,
            url,
            headers,
            body,
        }
    }
}

/// Build a descriptor straight from `(route, params, method)`.
pub fn build_request(
    config: &ClientConfig,
    route: &str,
    params: Params,
    method: Method,
) -> RequestDescriptor {
    Endpoint::new(method, route).params(params).build(config)
}

fn encode_pairs(pairs: &[(String, String)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

/// HubSpot wants `key=a&key=b`, never `key[0]=a&key[1]=b`.
fn strip_index_suffixes(query: &str) -> String {
    const OPEN: &str = "%5B";
    const CLOSE: &str = "%5D";

    let mut out = String::with_capacity(query.len());
    let mut rest = query;
    while let Some(pos) = rest.find(OPEN) {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + OPEN.len()..];
        let digits = after.bytes().take_while(u8::is_ascii_digit).count();
        if digits > 0 && after[digits..].starts_with(CLOSE) {
            rest = &after[digits + CLOSE.len()..];
        } else {
            out.push_str(OPEN);
            rest = after;
        }
    }
    out.push_str(rest);
    out
}

// ---------------------------------------------------------------------------
// Shaping helpers shared by the façade
// ---------------------------------------------------------------------------

/// Nest `input` under a `properties` key unless it already has one.
pub fn wrap_properties(input: Value) -> Value {
    match input {
        Value::Object(ref map) if map.contains_key("properties") => input,
        other => serde_json::json!({ "properties": other }),
    }
}

/// Percent-encode one path segment (emails, domains, user tokens).
pub fn segment(raw: &str) -> String {
    form_urlencoded::byte_serialize(raw.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// A list of object IDs, accepted either as a comma-separated string or as a
/// sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdList(Vec<String>);

impl IdList {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<&str> for IdList {
    fn from(raw: &str) -> Self {
        IdList(
            raw.split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }
}

impl From<String> for IdList {
    fn from(raw: String) -> Self {
        IdList::from(raw.as_str())
    }
}

impl From<Vec<String>> for IdList {
    fn from(ids: Vec<String>) -> Self {
        IdList(ids)
    }
}

impl From<Vec<&str>> for IdList {
    fn from(ids: Vec<&str>) -> Self {
        IdList(ids.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for IdList {
    fn from(ids: &[&str]) -> Self {
        IdList(ids.iter().map(|id| id.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for IdList {
    fn from(ids: [&str; N]) -> Self {
        IdList(ids.iter().map(|id| id.to_string()).collect())
    }
}

impl From<Vec<u64>> for IdList {
    fn from(ids: Vec<u64>) -> Self {
        IdList(ids.iter().map(u64::to_string).collect())
    }
}

impl From<&[u64]> for IdList {
    fn from(ids: &[u64]) -> Self {
        IdList(ids.iter().map(u64::to_string).collect())
    }
}

impl From<IdList> for Value {
    fn from(ids: IdList) -> Self {
        Value::Array(ids.0.into_iter().map(Value::String).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn keyed() -> ClientConfig {
        ClientConfig::builder()
            .api_key("demo")
            .base_url("https://api.example.test/")
            .build()
            .unwrap()
    }

    fn bearer() -> ClientConfig {
        ClientConfig::builder()
            .api_key("demo")
            .oauth_token("tok")
            .base_url("https://api.example.test/")
            .build()
            .unwrap()
    }

    fn anonymous() -> ClientConfig {
        ClientConfig::builder()
            .base_url("https://api.example.test/")
            .build()
            .unwrap()
    }

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn get_drops_null_and_empty_params() {
        let params = Params::new()
            .with("count", Option::<u32>::None)
            .with("offset", 5)
            .with("q", "");
        let req = build_request(&anonymous(), "contacts/v1/search/query", params, Method::Get);
        assert_eq!(req.url, "https://api.example.test/contacts/v1/search/query?offset=5");
        assert!(req.body.is_none());
    }

    #[test]
    fn get_never_carries_a_body() {
        let params = Params::new().with("nested", json!({"a": 1}));
        let req = build_request(&anonymous(), "x", params, Method::Get);
        assert!(req.body.is_none());
        assert!(req.header("Content-Type").is_none());
        assert_eq!(req.query_pairs(), pairs(&[("nested", r#"{"a":1}"#)]));
    }

    #[test]
    fn arrays_become_repeated_bare_keys() {
        let params = Params::new().with("property", json!(["a", "b"]));
        let req = build_request(&anonymous(), "contacts", params, Method::Get);
        assert_eq!(req.query(), Some("property=a&property=b"));
        assert_eq!(req.query_pairs(), pairs(&[("property", "a"), ("property", "b")]));
    }

    #[test]
    fn indexed_keys_are_normalized() {
        let params = Params::new()
            .with("property[0]", "a")
            .with("property[1]", "b")
            .with("tags[]", "x");
        let req = build_request(&anonymous(), "contacts", params, Method::Get);
        assert_eq!(req.query(), Some("property=a&property=b&tags%5B%5D=x"));
    }

    #[test]
    fn booleans_render_as_words() {
        let params = Params::new()
            .with("showListMemberships", false)
            .with("includeDeletes", true);
        let req = build_request(&anonymous(), "x", params, Method::Get);
        assert_eq!(
            req.query_pairs(),
            pairs(&[("includeDeletes", "true"), ("showListMemberships", "false")])
        );
    }

    #[test]
    fn non_get_serializes_filtered_json_body() {
        let params = Params::new()
            .with("name", "Widget")
            .with("description", Option::<String>::None)
            .with("enabled", false);
        let req = build_request(&anonymous(), "/products", params, Method::Post);
        assert_eq!(req.url, "https://api.example.test/products");
        assert_eq!(req.header("content-type"), Some("application/json"));
        assert_eq!(req.json_body().unwrap(), json!({"name": "Widget", "enabled": false}));
    }

    #[test]
    fn non_get_with_no_params_has_no_body() {
        let req = build_request(&anonymous(), "deals/v1/deal/1", Params::new(), Method::Delete);
        assert!(req.body.is_none());
        assert!(req.header("Content-Type").is_none());
    }

    #[test]
    fn array_payload_is_sent_verbatim() {
        let req = Endpoint::post("crm-objects/v1/objects/tickets")
            .json(json!([{"name": "subject", "value": "Hi"}]))
            .build(&anonymous());
        assert_eq!(req.json_body().unwrap(), json!([{"name": "subject", "value": "Hi"}]));
    }

    #[test]
    fn api_key_goes_to_query_string() {
        let req = build_request(&keyed(), "deals/v1/pipelines", Params::new(), Method::Get);
        assert_eq!(req.query_pairs(), pairs(&[("hapikey", "demo")]));
        assert!(req.header("Authorization").is_none());
    }

    #[test]
    fn api_key_also_applies_to_writes() {
        let req = build_request(
            &keyed(),
            "deals/v1/pipelines",
            Params::new().with("label", "Sales"),
            Method::Post,
        );
        assert_eq!(req.query_pairs(), pairs(&[("hapikey", "demo")]));
        assert_eq!(req.json_body().unwrap(), json!({"label": "Sales"}));
    }

    #[test]
    fn bearer_token_replaces_api_key() {
        let req = build_request(&bearer(), "deals/v1/pipelines", Params::new(), Method::Get);
        assert_eq!(req.header("Authorization"), Some("Bearer tok"));
        assert!(req.query_pairs().iter().all(|(k, _)| k != "hapikey"));
        assert_eq!(req.query(), None);
    }

    #[test]
    fn fixed_query_pairs_survive_non_get() {
        let req = Endpoint::post("crm-objects/v1/objects/tickets/batch-read")
            .query("includeDeletes", false)
            .query("properties", json!(["subject", "content"]))
            .params(Params::new().with("ids", json!(["1", "2"])))
            .build(&keyed());
        assert_eq!(
            req.query_pairs(),
            pairs(&[
                ("hapikey", "demo"),
                ("includeDeletes", "false"),
                ("properties", "subject"),
                ("properties", "content"),
            ])
        );
        assert_eq!(req.json_body().unwrap(), json!({"ids": ["1", "2"]}));
    }

    #[test]
    fn form_encoding_for_token_exchange() {
        let req = Endpoint::post("oauth/v1/token")
            .params(
                Params::new()
                    .with("grant_type", "authorization_code")
                    .with("code", "a b"),
            )
            .form()
            .without_auth()
            .build(&bearer());
        assert_eq!(req.header("Content-Type"), Some("application/x-www-form-urlencoded"));
        assert_eq!(req.body.as_deref(), Some("code=a+b&grant_type=authorization_code"));
        assert!(req.header("Authorization").is_none());
        assert_eq!(req.query(), None);
    }

    #[test]
    fn route_excludes_query() {
        let req = build_request(&keyed(), "a/b", Params::new(), Method::Get);
        assert_eq!(req.route(), "https://api.example.test/a/b");
    }

    #[test]
    fn wrap_properties_is_idempotent() {
        let once = wrap_properties(json!({"firstname": "A"}));
        assert_eq!(once, json!({"properties": {"firstname": "A"}}));
        assert_eq!(wrap_properties(once.clone()), once);

        let list = wrap_properties(json!([{"property": "email", "value": "a@b.c"}]));
        assert_eq!(list, json!({"properties": [{"property": "email", "value": "a@b.c"}]}));
    }

    #[test]
    fn id_list_accepts_strings_and_sequences() {
        let from_str = IdList::from("1,2,3");
        let from_vec = IdList::from(vec!["1".to_string(), "2".to_string(), "3".to_string()]);
        assert_eq!(from_str, from_vec);
        assert_eq!(IdList::from(" 1, 2 ,,3 "), from_str);
        assert_eq!(IdList::from(vec![1u64, 2, 3]), from_str);
        assert_eq!(Value::from(from_str), json!(["1", "2", "3"]));
    }

    #[test]
    fn segment_escapes_reserved_characters() {
        assert_eq!(segment("jane+doe@example.com"), "jane%2Bdoe%40example.com");
        assert_eq!(segment("a b/c"), "a%20b%2Fc");
        assert_eq!(segment("plain-id_1.2"), "plain-id_1.2");
    }

    #[test]
    fn params_merge_rules() {
        let mut base = Params::new().with("a", 1).with("b", 2);
        base.extend(Params::new().with("b", 3));
        assert_eq!(base.get("b"), Some(&json!(3)));

        let merged = Params::new().with("start", 10).with_defaults(Params::new().with("start", 1).with("x", 2));
        assert_eq!(merged.get("start"), Some(&json!(10)));
        assert_eq!(merged.get("x"), Some(&json!(2)));
    }
}

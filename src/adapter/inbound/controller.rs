//! Wire-style basket API.
//!
//! [`BasketController`] maps an [`Action`] onto the [`BasketService`] and
//! shapes the outcome as a JSON [`Response`]. Callers without a basket get
//! a 403 response for every action.

use serde_json::{json, Value};
use tracing::debug;

use crate::application::service::BasketService;
use crate::domain::basket::Basket;
use crate::domain::id::{BasketId, ItemRef};
use crate::error::Result;

/// Body of the 403 response.
pub const FORBIDDEN_MESSAGE: &str =
    "You do not have sufficient permissions to access the basket API";

/// HTTP-like status of a successful response.
pub const STATUS_OK: u16 = 200;

/// HTTP-like status of a refused response.
pub const STATUS_FORBIDDEN: u16 = 403;

/// An operation requested through the basket API.
///
/// Item lists are comma-separated strings such as `"10,20,30"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Action {
    Add(String),
    Remove(String),
    Clear,
    #[default]
    Dump,
    List,
    Create(String),
    Delete(BasketId),
    Rename(BasketId, String),
    Select(BasketId),
}

impl Action {
    /// Lowercase action name echoed in the response body.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add(_) => "add",
            Self::Remove(_) => "remove",
            Self::Clear => "clear",
            Self::Dump => "dump",
            Self::List => "list",
            Self::Create(_) => "create",
            Self::Delete(_) => "delete",
            Self::Rename(..) => "rename",
            Self::Select(_) => "select",
        }
    }
}

/// Outcome of an action.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub body: Value,
}

impl Response {
    fn ok(body: Value) -> Self {
        Self {
            status: STATUS_OK,
            body,
        }
    }

    fn forbidden() -> Self {
        Self {
            status: STATUS_FORBIDDEN,
            body: Value::String(FORBIDDEN_MESSAGE.to_string()),
        }
    }

    /// Whether the action was refused for lack of entitlement.
    #[must_use]
    pub fn is_forbidden(&self) -> bool {
        self.status == STATUS_FORBIDDEN
    }
}

/// Runs basket API actions for the service's identity.
pub struct BasketController {
    service: BasketService,
}

impl BasketController {
    pub fn new(service: BasketService) -> Self {
        Self { service }
    }

    /// The wrapped service.
    pub fn service(&mut self) -> &mut BasketService {
        &mut self.service
    }

    /// Run `action`.
    ///
    /// # Errors
    ///
    /// Returns the domain error for an unknown basket number, or the storage
    /// error if the change cannot be loaded or saved.
    pub fn handle(&mut self, action: Action) -> Result<Response> {
        let name = action.name();
        debug!(action = name, user = self.service.identity().id, "Handling basket action");

        let Some(baskets) = self.service.baskets()? else {
            return Ok(Response::forbidden());
        };

        let response = match action {
            Action::Add(refs) => {
                let basket = baskets.current_basket()?;
                let result = basket.add(normalize_refs(&refs))?;
                contents_response(name, &result, basket)
            }
            Action::Remove(refs) => {
                let basket = baskets.current_basket()?;
                let result = basket.remove(normalize_refs(&refs))?;
                contents_response(name, &result, basket)
            }
            Action::Clear => {
                let basket = baskets.current_basket()?;
                let result = basket.clear()?;
                contents_response(name, &result, basket)
            }
            Action::Dump => {
                let basket = baskets.current_basket()?;
                let result = basket.contents();
                contents_response(name, &result, basket)
            }
            Action::List => {
                let result: Vec<Value> = baskets
                    .iter()
                    .map(|(id, title)| json!({ "id": id, "name": title }))
                    .collect();
                Response::ok(json!({
                    "action": name,
                    "result": result,
                    "current": baskets.current(),
                }))
            }
            Action::Create(title) => {
                let id = baskets.create_basket(title.trim())?;
                id_response(name, id)
            }
            Action::Delete(id) => {
                baskets.remove_basket(id)?;
                id_response(name, id)
            }
            Action::Rename(id, title) => {
                baskets.rename_basket(id, title)?;
                id_response(name, id)
            }
            Action::Select(id) => {
                baskets.set_current(id)?;
                id_response(name, id)
            }
        };

        Ok(response)
    }
}

fn contents_response(action: &str, result: &[ItemRef], basket: &Basket) -> Response {
    Response::ok(json!({
        "action": action,
        "result": result,
        "count": basket.count(),
        "full": basket.is_full(),
    }))
}

fn id_response(action: &str, id: BasketId) -> Response {
    Response::ok(json!({
        "action": action,
        "result": id,
    }))
}

/// Parse a comma-separated list of item IDs.
///
/// Each token contributes its leading integer, so `"12abc"` reads as 12.
/// Tokens without leading digits become 0, which no basket accepts.
#[must_use]
pub fn normalize_refs(refs: &str) -> Vec<ItemRef> {
    let refs = refs.trim();
    if refs.is_empty() {
        return Vec::new();
    }

    refs.split(',')
        .map(leading_int)
        .collect()
}

/// Leading whitespace, an optional sign, then as many digits as follow.
/// Saturates at the `i64` bounds.
fn leading_int(token: &str) -> ItemRef {
    let token = token.trim_start();
    let (negative, digits) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
        });

    if negative {
        -magnitude
    } else {
        magnitude
    }
}

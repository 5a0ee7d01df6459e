//! Typed Postman collection (v2.1) document tree.
//!
//! Only the members the editor reads or writes are modeled; everything else
//! is kept in a flattened `extra` map on each node so that a load/save cycle
//! does not drop data the tool does not understand. Optional members stay
//! `None` when absent so nothing is added on save.

mod collection;
mod description;
mod item;
mod path;
mod request;
mod response;
mod url;

pub use collection::{Collection, Info, Variable, SCHEMA_V2_1};
pub use description::{Description, RichDescription};
pub use item::{Endpoint, Item, Section};
pub use path::SectionPath;
pub use request::{Body, BodyMode, FormParam, Header, Request};
pub use response::ExampleResponse;
pub use url::{Param, Url};

use serde::{Deserialize, Deserializer};

/// Unknown JSON members carried through a round trip untouched.
pub type Extra = serde_json::Map<String, serde_json::Value>;

/// Present members are `Some`, even when their value is `null`. Pair with
/// `#[serde(default)]` so an absent member stays `None` and is not written.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

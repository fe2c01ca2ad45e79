//! JSON arrays wrapped in an object, `{"items": [...]}`.

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::Result;

#[derive(Serialize)]
struct WrapperRef<'a, T> {
    items: &'a [T],
}

#[derive(Deserialize)]
struct Wrapper<T> {
    items: Vec<T>,
}

/// # Example
/// ```
/// use curve_kit::{json, Point};
///
/// let text = json::to_json(&[Point::new(1.0, 2.0)], false).unwrap();
/// assert_eq!(r#"{"items":[{"x":1.0,"y":2.0}]}"#, text);
/// ```
pub fn to_json<T: Serialize>(items: &[T], pretty: bool) -> Result<String> {
    let wrapper = WrapperRef { items };
    let text = if pretty {
        serde_json::to_string_pretty(&wrapper)?
    } else {
        serde_json::to_string(&wrapper)?
    };
    Ok(text)
}

pub fn from_json<T: DeserializeOwned>(text: &str) -> Result<Vec<T>> {
    let wrapper: Wrapper<T> = serde_json::from_str(text)?;
    Ok(wrapper.items)
}

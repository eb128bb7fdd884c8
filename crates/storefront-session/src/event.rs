//! UI events and the line-oriented script format that drives them.

use std::str::FromStr;
use std::time::Duration;

use storefront_commerce::search::{SortKey, ViewMode};
use storefront_commerce::ProductId;

use crate::error::SessionError;

/// Something the user did on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A keystroke in the search box; carries the full input value.
    TextInput(String),
    CategoryChanged(String),
    SortChanged(SortKey),
    /// The price slider moved.
    PriceSlider(i64),
    /// One of the min/max inputs was edited; carries both raw values.
    PriceInputs { min: String, max: String },
    ChangePage(usize),
    SwitchView(ViewMode),
    AddToCart { id: ProductId, quantity: u32 },
    SetQuantity { id: ProductId, quantity: i64 },
    RemoveFromCart(ProductId),
    ToggleCart,
    HoverRating(u8),
    LeaveRating,
    SetRating(u8),
    SubmitRating(ProductId),
    LoadRatings,
    /// Search again with the current query.
    Refresh,
}

/// One line of a session script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptStep {
    Event(Event),
    /// Let time pass before the next event.
    Wait(Duration),
}

/// Parse a script: one step per line, blank lines and `#` comments ignored.
pub fn parse_script(input: &str) -> Result<Vec<ScriptStep>, SessionError> {
    input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(number, line)| {
            parse_step(line).map_err(|message| SessionError::invalid_event(number, message))
        })
        .collect()
}

fn parse_step(line: &str) -> Result<ScriptStep, String> {
    let (verb, rest) = split_verb(line);
    if verb == "wait" {
        let ms: u64 = parse_arg(rest, "milliseconds")?;
        return Ok(ScriptStep::Wait(Duration::from_millis(ms)));
    }
    line.parse().map(ScriptStep::Event)
}

impl FromStr for Event {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (verb, rest) = split_verb(line.trim());
        let mut args = rest.split_whitespace();

        let event = match verb {
            // Free text keeps its inner spacing.
            "text" => Event::TextInput(rest.to_string()),
            "category" => Event::CategoryChanged(rest.to_string()),
            "sort" => Event::SortChanged(SortKey::parse(rest)),
            "price" => Event::PriceSlider(parse_arg(rest, "price")?),
            "prices" => Event::PriceInputs {
                min: args.next().unwrap_or_default().to_string(),
                max: args.next().unwrap_or_default().to_string(),
            },
            "page" => Event::ChangePage(parse_arg(rest, "page number")?),
            "view" => Event::SwitchView(ViewMode::parse(rest).map_err(|e| e.to_string())?),
            "add" => Event::AddToCart {
                id: parse_arg(args.next().unwrap_or_default(), "product id")?,
                quantity: match args.next() {
                    Some(q) => parse_arg(q, "quantity")?,
                    None => 1,
                },
            },
            "quantity" => Event::SetQuantity {
                id: parse_arg(args.next().unwrap_or_default(), "product id")?,
                quantity: parse_arg(args.next().unwrap_or_default(), "quantity")?,
            },
            "remove" => Event::RemoveFromCart(parse_arg(rest, "product id")?),
            "cart" => Event::ToggleCart,
            "hover" => Event::HoverRating(parse_arg(rest, "rating")?),
            "leave" => Event::LeaveRating,
            "rate" => Event::SetRating(parse_arg(rest, "rating")?),
            "submit" => Event::SubmitRating(parse_arg(rest, "product id")?),
            "ratings" => Event::LoadRatings,
            "search" => Event::Refresh,
            other => return Err(format!("unknown event '{other}'")),
        };
        Ok(event)
    }
}

fn split_verb(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    }
}

fn parse_arg<T: FromStr>(value: &str, what: &str) -> Result<T, String> {
    value
        .trim()
        .parse()
        .map_err(|_| format!("expected {what}, got '{}'", value.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_events() {
        assert_eq!(
            "text  desk lamp".parse::<Event>().unwrap(),
            Event::TextInput("desk lamp".to_string())
        );
        assert_eq!(
            "sort price_desc".parse::<Event>().unwrap(),
            Event::SortChanged(SortKey::PriceDesc)
        );
        assert_eq!(
            "add 4".parse::<Event>().unwrap(),
            Event::AddToCart {
                id: ProductId::new(4),
                quantity: 1
            }
        );
        assert_eq!(
            "quantity 4 -1".parse::<Event>().unwrap(),
            Event::SetQuantity {
                id: ProductId::new(4),
                quantity: -1
            }
        );
        assert_eq!(
            "prices 10".parse::<Event>().unwrap(),
            Event::PriceInputs {
                min: "10".to_string(),
                max: String::new()
            }
        );
        assert_eq!(
            "category".parse::<Event>().unwrap(),
            Event::CategoryChanged(String::new())
        );
        assert_eq!("cart".parse::<Event>().unwrap(), Event::ToggleCart);
    }

    #[test]
    fn test_parse_errors() {
        assert!("page two".parse::<Event>().is_err());
        assert!("view tiles".parse::<Event>().is_err());
        assert!("dance".parse::<Event>().is_err());
    }

    #[test]
    fn test_parse_script() {
        let script = "# warm up\ntext mug\n\nwait 400\npage 2\n";
        let steps = parse_script(script).unwrap();
        assert_eq!(
            steps,
            vec![
                ScriptStep::Event(Event::TextInput("mug".to_string())),
                ScriptStep::Wait(Duration::from_millis(400)),
                ScriptStep::Event(Event::ChangePage(2)),
            ]
        );
    }

    #[test]
    fn test_script_error_reports_line() {
        let err = parse_script("text mug\nrate lots\n").unwrap_err();
        assert_eq!(
            err,
            SessionError::invalid_event(2, "expected rating, got 'lots'")
        );
    }
}

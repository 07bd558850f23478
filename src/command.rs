use crate::error::LongMapError;
use crate::error::Result;
use std::str::FromStr;

/// One line of a `longmap` script.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Put(i64, String),
    Get(i64),
    Remove(i64),
    ContainsKey(i64),
    ContainsValue(String),
    Keys,
    Values,
    Size,
    IsEmpty,
    Clear,
}

fn parse_key<'a>(words: &mut impl Iterator<Item = &'a str>) -> Result<i64> {
    let word = words.next().ok_or(LongMapError::MissingArgument("key"))?;
    word.parse::<i64>()
        .map_err(|err| LongMapError::InvalidKey(word.to_string(), err))
}

// The value is everything after the preceding arguments, single-spaced.
fn parse_value<'a>(words: impl Iterator<Item = &'a str>) -> Result<String> {
    let value = words.collect::<Vec<_>>().join(" ");
    if value.is_empty() {
        return Err(LongMapError::MissingArgument("value"));
    }
    Ok(value)
}

impl FromStr for Command {
    type Err = LongMapError;

    fn from_str(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(LongMapError::MissingArgument("command"))?;
        match name {
            "put" => {
                let key = parse_key(&mut words)?;
                Ok(Self::Put(key, parse_value(words)?))
            }
            "get" => Ok(Self::Get(parse_key(&mut words)?)),
            "rm" => Ok(Self::Remove(parse_key(&mut words)?)),
            "contains-key" => Ok(Self::ContainsKey(parse_key(&mut words)?)),
            "contains-value" => Ok(Self::ContainsValue(parse_value(words)?)),
            "keys" => Ok(Self::Keys),
            "values" => Ok(Self::Values),
            "size" => Ok(Self::Size),
            "is-empty" => Ok(Self::IsEmpty),
            "clear" => Ok(Self::Clear),
            other => Err(LongMapError::UnknownCommand(other.to_string())),
        }
    }
}

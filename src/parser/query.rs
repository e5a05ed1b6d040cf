//! Expansion of query strings into nested parameters.

use crate::parser::str::{find, find_split_hole};
use crate::percent_encode::decode_form;
use crate::types::{Parameters, Value};

/// Splits a key into the top-level name and the bracketed subkeys.
///
/// `[]` is reported as `None`. If the first bracket does not close, the
/// whole key is the name. Anything after the last closed bracket is ignored.
#[must_use]
fn split_key(key: &str) -> (&str, Vec<Option<&str>>) {
    let (name, mut rest) = match find(key, b'[') {
        Some(pos) => (&key[..pos], &key[pos..]),
        None => return (key, Vec::new()),
    };

    let mut subkeys = Vec::new();
    while let Some(inner) = rest.strip_prefix('[') {
        match find_split_hole(inner, b']') {
            Some((subkey, after)) => {
                subkeys.push(Some(subkey).filter(|s| !s.is_empty()));
                rest = after;
            }
            None => break,
        }
    }

    if subkeys.is_empty() {
        (key, subkeys)
    } else {
        (name, subkeys)
    }
}

/// Returns the first unused index among the numeric keys of the map.
#[must_use]
fn next_index(map: &Parameters) -> String {
    map.keys()
        .filter_map(|k| k.parse::<usize>().ok())
        .max()
        .map_or(0, |max| max + 1)
        .to_string()
}

/// Returns the slot for `key` in the container `parent`, creating it if needed.
///
/// `None` appends. A string parent becomes a list when appended to and a map
/// otherwise, and a list parent receiving a named key is turned into a map.
fn child<'v>(parent: &'v mut Value, key: Option<&str>) -> &'v mut Value {
    if key.is_none() && !matches!(parent, Value::Map(_)) {
        if let Value::String(_) = parent {
            *parent = Value::List(Vec::new());
        }
        return match parent {
            Value::List(items) => {
                items.push(Value::default());
                let last = items.len() - 1;
                &mut items[last]
            }
            _ => unreachable!("[consistency] a string is replaced by a list above"),
        };
    }

    let map = parent.make_map();
    let key = match key {
        Some(key) => key.to_owned(),
        None => next_index(map),
    };
    map.entry(key).or_default()
}

/// Inserts a value at `name[subkeys[0]][subkeys[1]]...`.
fn insert(params: &mut Parameters, name: &str, subkeys: &[Option<&str>], value: String) {
    if subkeys.is_empty() {
        params.insert(name.to_owned(), Value::String(value));
        return;
    }

    let mut slot = params.entry(name.to_owned()).or_default();
    for subkey in subkeys {
        slot = child(slot, *subkey);
    }
    *slot = Value::String(value);
}

/// Parses a query string into nested parameters.
///
/// Pairs are separated by `&`, and the key and the value by the first `=`.
/// A pair without `=` has an empty value. Keys and values are form-decoded
/// once, after the split, so encoded `&` and `=` stay in the data.
///
/// Repeated keys overwrite earlier values.
#[must_use]
pub(crate) fn parse_query(query: &str) -> Parameters {
    let mut params = Parameters::new();
    for pair in query.split('&').filter(|pair| !pair.is_empty()) {
        let (key, value) = find_split_hole(pair, b'=').unwrap_or((pair, ""));
        let key = decode_form(key);
        let (name, subkeys) = split_key(&key);
        if name.is_empty() {
            continue;
        }
        let value = decode_form(value).into_owned();
        insert(&mut params, name, &subkeys, value);
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a map value from entries.
    fn map<const N: usize>(entries: [(&str, Value); N]) -> Value {
        Value::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_owned(), v))
                .collect(),
        )
    }

    #[test]
    fn flat() {
        let params = parse_query("weight=25&redis_cluster=1");
        assert_eq!(params["weight"], "25");
        assert_eq!(params["redis_cluster"], "1");
        assert_eq!(
            params.keys().collect::<Vec<_>>(),
            ["weight", "redis_cluster"]
        );
    }

    #[test]
    fn nested_without_values() {
        let params = parse_query("host[h1]&host[h2]&host[/foo:]");
        assert_eq!(
            params["host"],
            map([("h1", "".into()), ("h2", "".into()), ("/foo:", "".into())])
        );
    }

    #[test]
    fn deeply_nested() {
        let params = parse_query(
            "queues[messages][arguments][x-delay]=100&queues[messages][arguments][x-expires]=150&",
        );
        let expected = map([(
            "messages",
            map([(
                "arguments",
                map([("x-delay", "100".into()), ("x-expires", "150".into())]),
            )]),
        )]);
        assert_eq!(params["queues"], expected);
    }

    #[test]
    fn lists() {
        let params = parse_query("a[]=1&a[]=2");
        assert_eq!(params["a"], Value::List(vec!["1".into(), "2".into()]));

        let params = parse_query("a[][x]=1&a[][x]=2");
        assert_eq!(
            params["a"],
            Value::List(vec![map([("x", "1".into())]), map([("x", "2".into())])])
        );
    }

    #[test]
    fn list_then_named_key() {
        let params = parse_query("a[]=1&a[x]=2&a[]=3");
        assert_eq!(
            params["a"],
            map([("0", "1".into()), ("x", "2".into()), ("1", "3".into())])
        );
    }

    #[test]
    fn overwrite() {
        let params = parse_query("a=1&a=2");
        assert_eq!(params["a"], "2");

        let params = parse_query("a=1&a[b]=2");
        assert_eq!(params["a"], map([("b", "2".into())]));

        let params = parse_query("a[b]=2&a=1");
        assert_eq!(params["a"], "1");
    }

    #[test]
    fn odd_keys() {
        let params = parse_query("=1&&[x]=2");
        assert!(params.is_empty());

        let params = parse_query("a[b=1");
        assert_eq!(params["a[b"], "1");

        let params = parse_query("a[b]c=1");
        assert_eq!(params["a"], map([("b", "1".into())]));
    }

    #[test]
    fn decoding() {
        let params = parse_query("host%5Bh1%5D=a%26b&msg=hello+world");
        assert_eq!(params["host"], map([("h1", "a&b".into())]));
        assert_eq!(params["msg"], "hello world");

        let params = parse_query("msg=hello+world%21&eq=a%3Db%26c");
        assert_eq!(params["msg"], "hello world!");
        assert_eq!(params["eq"], "a=b&c");
    }
}

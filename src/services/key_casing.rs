use serde_json::{Map, Value};

/// Rewrites every object key from snake_case to camelCase, recursively.
/// Keys without underscores pass through untouched.
pub fn camelize_keys(value: Value) -> Value {
    rewrite_keys(value, &to_camel_case)
}

fn rewrite_keys(value: Value, convert: &dyn Fn(&str) -> String) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (convert(&key), rewrite_keys(value, convert)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| rewrite_keys(item, convert))
                .collect(),
        ),
        other => other,
    }
}

/// First word lowercased, later words capitalized. Leading and trailing
/// underscores are kept.
pub fn to_camel_case(key: &str) -> String {
    let core = key.trim_matches('_');
    if !core.contains('_') {
        return key.to_string();
    }

    let leading = &key[..key.len() - key.trim_start_matches('_').len()];
    let trailing = &key[key.trim_end_matches('_').len()..];

    let mut out = String::with_capacity(key.len());
    out.push_str(leading);
    for (i, word) in core.split('_').filter(|w| !w.is_empty()).enumerate() {
        if i == 0 {
            out.push_str(&word.to_lowercase());
            continue;
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
        }
    }
    out.push_str(trailing);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // Inverse transform, used to check round trips on request-shaped bodies.
    fn snake_case_keys(value: Value) -> Value {
        rewrite_keys(value, &to_snake_case)
    }

    fn to_snake_case(key: &str) -> String {
        let chars: Vec<char> = key.chars().collect();
        let mut out = String::with_capacity(key.len() + 4);
        for (i, &c) in chars.iter().enumerate() {
            if c.is_uppercase() && i > 0 {
                let prev = chars[i - 1];
                let next_is_lower = chars.get(i + 1).map_or(false, |n| n.is_lowercase());
                let starts_word = prev.is_lowercase()
                    || prev.is_ascii_digit()
                    || (prev.is_uppercase() && next_is_lower);
                if starts_word && prev != '_' {
                    out.push('_');
                }
            }
            out.extend(c.to_lowercase());
        }
        out
    }

    #[test]
    fn camel_cases_snake_keys() {
        assert_eq!(to_camel_case("token_address"), "tokenAddress");
        assert_eq!(to_camel_case("num_distinct_tokens_owned"), "numDistinctTokensOwned");
        assert_eq!(to_camel_case("include_erc20_tokens"), "includeErc20Tokens");
        assert_eq!(to_camel_case("tokenAddress"), "tokenAddress");
        assert_eq!(to_camel_case("_private_key"), "_privateKey");
    }

    #[test]
    fn first_word_is_lowercased() {
        assert_eq!(to_camel_case("Token_address"), "tokenAddress");
        assert_eq!(to_camel_case("TOKEN_BALANCE"), "tokenBalance");
        // No underscore: left alone.
        assert_eq!(to_camel_case("TokenAddress"), "TokenAddress");
    }

    #[test]
    fn snake_cases_camel_keys() {
        assert_eq!(to_snake_case("tokenAddress"), "token_address");
        assert_eq!(to_snake_case("includeErc20Tokens"), "include_erc20_tokens");
        assert_eq!(to_snake_case("imageURL"), "image_url");
        assert_eq!(to_snake_case("pageKey"), "page_key");
        assert_eq!(to_snake_case("data"), "data");
    }

    #[test]
    fn rewrites_nested_objects_and_arrays() {
        let wire = json!({
            "data": {
                "tokens": [
                    {"token_address": "0x1", "token_metadata": {"decimals": 6}},
                    {"tokenBalance": "0x0"}
                ],
                "page_key": null
            }
        });

        let camel = camelize_keys(wire);
        assert_eq!(camel["data"]["tokens"][0]["tokenAddress"], "0x1");
        assert_eq!(camel["data"]["tokens"][0]["tokenMetadata"]["decimals"], 6);
        assert_eq!(camel["data"]["tokens"][1]["tokenBalance"], "0x0");
        assert!(camel["data"].as_object().unwrap().contains_key("pageKey"));

        let snake = snake_case_keys(camel);
        assert_eq!(snake["data"]["tokens"][0]["token_address"], "0x1");
        assert_eq!(snake["data"]["tokens"][1]["token_balance"], "0x0");
    }
}

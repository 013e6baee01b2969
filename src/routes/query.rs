use log::debug;

pub const NUMS: &str = "nums";

/// Value of the first `nums` pair in a url-encoded query string.
pub fn nums(query: Option<&str>) -> Option<String> {
    let query = query?;
    match serde_urlencoded::from_str::<Vec<(String, String)>>(query) {
        Ok(pairs) => pairs
            .into_iter()
            .find(|(key, _)| key == NUMS)
            .map(|(_, value)| value),
        Err(err) => {
            debug!("Unable to decode query `{}`: {}", query, err);
            None
        }
    }
}

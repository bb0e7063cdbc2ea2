use crate::constants::REQUEST_ID_LENGTH;

/// Alphabet used for request correlation ids
const ID_ALPHABET: [char; 36] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

/// Generates a request correlation id.
///
/// The id is `REQUEST_ID_LENGTH` characters of uppercase ASCII letters and
/// digits, produced by `nanoid`. It is attached to every outgoing request as
/// the `X-Request-Id` header and to the matching log lines.
///
/// # Examples
/// ```
/// use http_api_client::utils::id::get_id;
/// let id = get_id();
/// assert_eq!(id.len(), 30);
/// ```
#[must_use]
pub fn get_id() -> String {
    nanoid::nanoid!(REQUEST_ID_LENGTH, &ID_ALPHABET)
}

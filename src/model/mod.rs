/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
/// Operations, responses and URL rendering
pub mod http;
/// Base contract for payload schemas
pub mod schema;

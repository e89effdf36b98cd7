use nook_core::Route;

use crate::error::CliError;

pub fn run_route(path: &str, as_json: bool) -> Result<String, CliError> {
    let route = Route::parse(path)?;

    if as_json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(&route)?));
    }

    let mut output = format!("page: {}\npath: {}\n", route.title(), route.path());
    if let Route::Search {
        request: Some(request),
    } = &route
    {
        output.push_str(&format!(
            "query: {}\nmode: {}\n",
            request.query, request.mode
        ));
    }
    Ok(output)
}

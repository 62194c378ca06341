use crate::api::hooks::RequestInfo;

/// Render a request as a multi-line cURL command
pub fn make_curl_command(request: &RequestInfo) -> String {
    let mut items = vec![format!("curl -X '{}'", request.method), quote(&request.url)];

    for (name, value) in &request.headers {
        items.push(format!("-H {}", quote(&format!("{}: {}", name, value))));
    }

    if let Some(body) = &request.body {
        items.push(format!("-d {}", quote(&String::from_utf8_lossy(body))));
    }

    items.join(" \\\n ")
}

/// Single-quote for a POSIX shell; an embedded `'` becomes `'\''`
fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "'\\''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curl_with_headers_and_body() {
        let request = RequestInfo {
            method: "POST".to_string(),
            url: "https://cism-ms.ru/api/v1/vacancies".to_string(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(br#"{"page":1}"#.to_vec()),
        };

        assert_eq!(
            make_curl_command(&request),
            "curl -X 'POST' \\\n 'https://cism-ms.ru/api/v1/vacancies' \\\n -H 'content-type: application/json' \\\n -d '{\"page\":1}'"
        );
    }

    #[test]
    fn test_curl_escapes_single_quotes() {
        let request = RequestInfo {
            method: "POST".to_string(),
            url: "https://cism-ms.ru/api/v1/feedback".to_string(),
            headers: Vec::new(),
            body: Some(br#"{"name":"O'Brien"}"#.to_vec()),
        };

        let command = make_curl_command(&request);
        assert!(command.ends_with(r#"-d '{"name":"O'\''Brien"}'"#), "{}", command);
    }

    #[test]
    fn test_curl_without_body() {
        let request = RequestInfo {
            method: "GET".to_string(),
            url: "http://localhost/health".to_string(),
            headers: Vec::new(),
            body: None,
        };
        assert_eq!(make_curl_command(&request), "curl -X 'GET' \\\n 'http://localhost/health'");
    }
}

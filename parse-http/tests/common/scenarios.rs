//! Transport-independent checks, run once per `HttpClient` implementation.

use std::collections::HashMap;
use std::sync::mpsc;
use std::time::Duration;

use futures::executor::block_on;
use parse_http::{
    ApiOption, Configuration, Error, HttpClient, ParseClient, ParseError, Result,
};
use serde::Deserialize;

use super::{closed_port_url, serve_once};

#[derive(Debug, Deserialize, PartialEq)]
struct Average {
    movie: String,
    stars: f64,
}

fn client_for<H: HttpClient + 'static>(url: &str, http: H) -> ParseClient<H> {
    let config = Configuration::new("test-app", &format!("{url}/parse"))
        .unwrap()
        .with_client_key("test-client-key");
    ParseClient::new(config, http).unwrap()
}

pub fn get_sends_headers_and_query<H: HttpClient>(http: H) {
    let (url, server) = serve_once(200, r#"{"result": "ok"}"#);

    let response = http
        .get(
            &format!("{url}/parse/functions/hello"),
            &[("X-Parse-Application-Id", "app".to_string())],
            &[("name", "ada".to_string())],
        )
        .unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(response.body, r#"{"result": "ok"}"#);

    let request = server.join().unwrap();
    assert!(
        request.starts_with("GET /parse/functions/hello?name=ada HTTP/1.1"),
        "unexpected request line: {request}"
    );
    assert!(request.to_lowercase().contains("x-parse-application-id: app"));
}

pub fn error_status_is_not_a_transport_error<H: HttpClient>(http: H) {
    let (url, server) = serve_once(400, r#"{"code": 141, "error": "nope"}"#);

    let response = http
        .get(&format!("{url}/parse/functions/hello"), &[], &[])
        .unwrap();
    assert_eq!(response.status, 400);
    assert!(!response.is_success());
    server.join().unwrap();
}

pub fn connection_refused<H: HttpClient>(http: H) {
    let result = http.get(&closed_port_url(), &[], &[]);
    assert!(matches!(result, Err(Error::HttpGet(_))));
}

pub fn call_function_end_to_end<H: HttpClient + 'static>(http: H) {
    let (url, server) = serve_once(200, r#"{"result": {"movie": "Alien", "stars": 4.0}}"#);
    let client = client_for(&url, http);

    let params = HashMap::from([("movie".to_string(), "Alien".to_string())]);
    let average: Average = client
        .cloud()
        .call_function("averageStars", Some(params))
        .unwrap();
    assert_eq!(
        average,
        Average {
            movie: "Alien".into(),
            stars: 4.0
        }
    );

    let request = server.join().unwrap();
    assert!(request.starts_with("GET /parse/functions/averageStars?movie=Alien HTTP/1.1"));
    let lower = request.to_lowercase();
    assert!(lower.contains("x-parse-application-id: test-app"));
    assert!(lower.contains("x-parse-client-key: test-client-key"));
}

pub fn call_function_script_failure<H: HttpClient + 'static>(http: H) {
    let (url, server) = serve_once(400, r#"{"code": 141, "error": "movie is required"}"#);
    let client = client_for(&url, http);

    let err = client
        .cloud()
        .call_function::<Average>("averageStars", None)
        .unwrap_err();
    assert_eq!(err.parse_code(), Some(ParseError::SCRIPT_FAILED));
    server.join().unwrap();
}

pub fn call_function_with_session_token<H: HttpClient + 'static>(http: H) {
    let (url, server) = serve_once(200, r#"{"result": "r:abc"}"#);
    let client = client_for(&url, http);

    let token: String = client
        .cloud()
        .call_function_with_options("whoami", None, &[ApiOption::SessionToken("r:abc".into())])
        .unwrap();
    assert_eq!(token, "r:abc");

    let request = server.join().unwrap().to_lowercase();
    assert!(request.contains("x-parse-session-token: r:abc"));
}

pub fn background_call<H: HttpClient + 'static>(http: H) {
    let (url, server) = serve_once(200, r#"{"result": 42}"#);
    let client = client_for(&url, http);
    let main_queue = client.main_queue();
    let (tx, rx) = mpsc::channel();

    client.cloud().call_function_in_background(
        "answer",
        None,
        main_queue.clone(),
        move |result: Result<u32>| {
            let _ = tx.send(result);
        },
    );

    assert!(main_queue.run_next_timeout(Duration::from_secs(10)));
    assert_eq!(rx.try_recv().unwrap().unwrap(), 42);
    server.join().unwrap();
}

pub fn async_call_unexpected_status<H: HttpClient + 'static>(http: H) {
    let (url, server) = serve_once(404, "<html>not here</html>");
    let client = client_for(&url, http);

    let result = block_on(client.cloud().call_function_async::<u32>("missing", None));
    match result {
        Err(Error::UnexpectedStatus { status, .. }) => assert_eq!(status, 404),
        other => panic!("unexpected result: {other:?}"),
    }
    server.join().unwrap();
}

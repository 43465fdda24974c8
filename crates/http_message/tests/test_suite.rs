use carbon_http_message::{
    BodyArg, HttpVersion, InvalidArgument, Method, Request, Stream, Uri, UriArg,
};
use carbon_http_test_suite::{
    METHODS, TARGETS, body, init_logger, mixed_case, request_with_host,
};
use uhsapi::http::{HttpMessage, HttpRequest, StreamInterface, UriInterface};

#[test]
fn test_methods_are_upper_cased_in_any_case() {
    init_logger();
    for method in METHODS {
        for input in [method.to_string(), method.to_ascii_lowercase(), mixed_case(method)] {
            let request = Request::new(&input, "/").unwrap();
            assert_eq!(request.method().as_str(), *method);
        }
    }
}

#[test]
fn test_unknown_methods_and_versions_are_rejected() {
    init_logger();
    assert_eq!(
        Request::new("GETX", "/").unwrap_err(),
        InvalidArgument::UnsupportedMethod("GETX".to_owned())
    );
    for version in ["1.5", "1.0", "4.0", "one"] {
        assert_eq!(
            Request::builder().version(version).build().unwrap_err(),
            InvalidArgument::UnsupportedVersion(version.to_owned())
        );
    }
    for version in ["1.1", "2.0", "3.0"] {
        let request = Request::builder().version(version).build().unwrap();
        assert_eq!(request.protocol_version(), version);
    }
}

#[test]
fn test_request_targets_derive_from_uri() {
    init_logger();
    for (uri, target) in TARGETS {
        let request = Request::new("GET", *uri).unwrap();
        assert_eq!(request.request_target(), *target, "{uri}");
        assert_eq!(request.request_target(), request.request_target());
    }
}

#[test]
fn test_request_target_override_is_validated() {
    init_logger();
    let request = Request::new("GET", "https://terryl.in/zh/").unwrap();
    assert!(matches!(
        request.with_request_target("/newTarget/te st/?q=1234"),
        Err(InvalidArgument::TargetWhitespace(_))
    ));
    assert!(matches!(
        request.with_request_target_any(std::collections::HashMap::from([("foo", "bar")])),
        Err(InvalidArgument::TargetType(_))
    ));

    let derived = HttpRequest::with_request_target(&request, "/newTarget/test/?q=1234").unwrap();
    assert_eq!(HttpRequest::request_target(&derived), "/newTarget/test/?q=1234");
    assert_eq!(request.request_target(), "/zh/");
}

#[test]
fn test_preserve_host_keeps_existing_host() {
    init_logger();
    let request = request_with_host("play.google.com");
    let uri = Uri::parse("https://www.facebook.com/").unwrap();

    let preserved = request.with_uri(uri.clone(), true);
    assert_eq!(preserved.header_line("Host"), "play.google.com");
    assert_eq!(preserved.uri().host(), "play.google.com");

    let moved = request.with_uri(uri, false);
    assert_eq!(moved.header_line("host"), "www.facebook.com");
    assert_eq!(UriInterface::host(HttpRequest::uri(&moved)), "www.facebook.com");
}

#[test]
fn test_preserve_host_without_host_header_takes_new_uri() {
    init_logger();
    let request = Request::new("GET", "https://play.google.com/").unwrap();
    assert!(HttpMessage::headers(&request).is_empty());

    let moved = request.with_uri(Uri::parse("https://www.facebook.com/").unwrap(), true);
    assert_eq!(moved.uri().host(), "www.facebook.com");
    assert_eq!(moved.header("Host"), ["www.facebook.com"]);
}

#[test]
fn test_bodies_round_trip() {
    init_logger();
    let request = Request::builder().body("test stream").build().unwrap();
    assert_eq!(&request.body().contents().unwrap()[..], b"test stream");

    let stream = body("shared");
    let request = Request::builder().body(stream.clone()).build().unwrap();
    assert!(HttpMessage::body(&request).ptr_eq(&stream));
    assert_eq!(&StreamInterface::contents(request.body()).unwrap()[..], b"shared");

    let replaced = request.with_body(Stream::from_bytes("other"));
    assert!(request.body().ptr_eq(&stream));
    assert_eq!(replaced.body().to_string(), "other");

    let ignored = Request::builder()
        .body(BodyArg::from_any(vec![1, 2, 3]))
        .build()
        .unwrap();
    assert_eq!(ignored.body().size(), Some(0));
}

#[test]
fn test_derivations_never_touch_the_source() {
    init_logger();
    let request = Request::new("GET", "https://terryl.in/").unwrap();

    let post = request.with_method("POST").unwrap();
    assert_eq!(post.method(), Method::POST);
    assert_eq!(request.method(), Method::GET);

    let v2 = request.with_protocol_version("2.0").unwrap();
    assert_eq!(v2.version(), HttpVersion::HTTP_2_0);
    assert_eq!(request.version(), HttpVersion::HTTP_1_1);

    let tagged = request.with_header("X-Tag", "a");
    assert!(tagged.has_header("x-tag"));
    assert!(!request.has_header("X-Tag"));
}

#[test]
fn test_uri_arguments_are_type_checked() {
    init_logger();
    let uri = Uri::parse("https://terryl.in/").unwrap();
    let request = Request::new("GET", UriArg::from_any(uri.clone()).unwrap()).unwrap();
    assert_eq!(request.uri(), &uri);

    let err = UriArg::from_any(42i64).unwrap_err();
    assert_eq!(err, InvalidArgument::UriType("i64"));
    assert!(err.to_string().contains("i64"));
}

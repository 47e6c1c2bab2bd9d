use std::sync::Mutex;

use super::*;

struct Tagger {
    tag: &'static str,
    log: Arc<Mutex<Vec<String>>>,
}

impl Interceptor for Tagger {
    fn name(&self) -> &'static str {
        self.tag
    }

    fn on_request(&self, request: &mut ApiRequest) {
        let seen = request.header("X-Trail").unwrap_or_default().to_owned();
        request.set_header("X-Trail", format!("{seen}{}", self.tag));
        self.log.lock().unwrap().push(format!("req:{}", self.tag));
    }

    fn on_response(&self, _request: &ApiRequest, response: &ApiResponse) {
        self.log.lock().unwrap().push(format!("resp:{}:{}", self.tag, response.status));
    }

    fn on_error(&self, _request: &ApiRequest, error: &ApiError) {
        self.log.lock().unwrap().push(format!("err:{}:{:?}", self.tag, error.status()));
    }
}

fn chain_with(tags: &[&'static str]) -> (InterceptorChain, Arc<Mutex<Vec<String>>>) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut chain = InterceptorChain::new();
    for &tag in tags {
        chain.push(Arc::new(Tagger {
            tag,
            log: Arc::clone(&log),
        }));
    }
    (chain, log)
}

// =============================================================================
// ordering
// =============================================================================

#[test]
fn request_stages_run_in_registration_order() {
    let (chain, log) = chain_with(&["a", "b", "c"]);
    let mut req = ApiRequest::get("jobs/");
    chain.apply_request(&mut req);
    assert_eq!(req.header("X-Trail"), Some("abc"));
    assert_eq!(*log.lock().unwrap(), vec!["req:a", "req:b", "req:c"]);
}

#[test]
fn response_stages_run_in_registration_order() {
    let (chain, log) = chain_with(&["a", "b"]);
    chain.apply_response(&ApiRequest::get("jobs/"), &ApiResponse::new(200, "[]"));
    assert_eq!(*log.lock().unwrap(), vec!["resp:a:200", "resp:b:200"]);
}

#[test]
fn error_stages_see_the_same_error() {
    let (chain, log) = chain_with(&["a", "b"]);
    chain.apply_error(&ApiRequest::get("jobs/"), &ApiError::Server { status: 502 });
    assert_eq!(*log.lock().unwrap(), vec!["err:a:Some(502)", "err:b:Some(502)"]);
}

// =============================================================================
// bookkeeping
// =============================================================================

#[test]
fn empty_chain_leaves_request_untouched() {
    let chain = InterceptorChain::new();
    let mut req = ApiRequest::get("jobs/");
    let before = req.clone();
    chain.apply_request(&mut req);
    assert!(chain.is_empty());
    assert_eq!(req, before);
}

#[test]
fn names_reflect_stage_order() {
    let (mut chain, _log) = chain_with(&["first"]);
    chain.push(Arc::new(RequestLog));
    assert_eq!(chain.len(), 2);
    assert_eq!(chain.names(), vec!["first", "request-log"]);
}

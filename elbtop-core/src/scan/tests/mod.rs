mod split_tests;

/// A well-formed ELB access log line with the given latency fields.
fn elb_line(request: &str, backend: &str, response: &str) -> String {
    format!(
        "2015-05-13T23:39:43.945958Z my-loadbalancer 192.168.131.39:2817 10.0.0.1:80 \
         {request} {backend} {response} 200 200 0 29 \
         \"GET http://www.example.com:80/ HTTP/1.1\" \"curl/7.38.0\" - -\n"
    )
}

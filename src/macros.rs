// helpers for tests: turn a wireshark-style hex dump (as embedded in this
// crate's own test modules, following the teacher's test data convention)
// into a byte vector and decode/encode it via the ToWire/FromWire traits
#[macro_export]
macro_rules! test_from_wire {
    ($slice:expr, $t:ty) => {{
        let s = crate::util::get_sample_slice($slice);
        <$t as $crate::network_order::FromWire>::from_wire(s.as_slice(), 0)
            .expect("sample slice should decode")
            .0
    }};
}

#[macro_export]
macro_rules! test_to_wire {
    ($data:expr) => {{
        let mut buffer: Vec<u8> = Vec::new();
        $crate::network_order::ToWire::to_wire(&$data, &mut buffer).unwrap();
        buffer
    }};
}

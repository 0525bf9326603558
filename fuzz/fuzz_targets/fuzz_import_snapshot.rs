#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Import either yields a graph or an error; anything it yields must
        // survive validation and emission.
        if let Ok(graph) = archlab::import_graph(content) {
            let _ = archlab::validate(&graph);
            let _ = archlab::generate_all_code(&graph, &archlab::CSharpEmitter::new());
        }
    }
});

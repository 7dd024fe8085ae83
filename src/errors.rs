error_chain! {
    errors {
        SolveError(s: String) {
            description("Solver error")
            display("Solver error: {}", s)
        }
        DecompositionError(s: String) {
            description("Decomposition error")
            display("Decomposition error: {}", s)
        }
    }
}

mod config_tests;

// This file organizes the integration tests into a cohesive test suite.
// Each module tests a specific aspect of the application:
// - time_tests: Timestamp parsing and the pure time helpers
// - anomaly_tests: Shift comparison and anomaly labeling
// - grid_tests: Date-range filtering and row grouping
// - config_tests: Default range resolution
// - web_tests: Handlers, page rendering and application state

mod feed_pipeline_tests;
mod simulation_scenarios_tests;

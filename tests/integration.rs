mod integration {
    mod common;
    mod export_flow;
    mod menu;
    mod startup;
}

pub mod u101_compose_reply;

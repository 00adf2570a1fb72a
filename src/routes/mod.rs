pub mod automovel_routes;

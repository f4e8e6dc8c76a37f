pub mod leaflet_server;

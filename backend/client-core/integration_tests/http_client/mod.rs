mod reqwest_transport;

pub mod signin;
